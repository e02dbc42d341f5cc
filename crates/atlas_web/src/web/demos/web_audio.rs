use leptos::prelude::*;

use webapi_atlas::CloseHandle;

use super::{demo_class, js_error_text, DoneButton};
use crate::ui_model::{clamp_frequency, Waveform, TONE_DEFAULT_HZ, TONE_MAX_HZ, TONE_MIN_HZ};

const GAIN: f32 = 0.2;

struct Tone {
    ctx: web_sys::AudioContext,
    osc: web_sys::OscillatorNode,
}

impl Tone {
    fn start(hz: f32, wave: Waveform) -> Result<Tone, String> {
        let ctx = web_sys::AudioContext::new().map_err(|e| js_error_text(&e))?;
        let osc = ctx.create_oscillator().map_err(|e| js_error_text(&e))?;
        let gain = ctx.create_gain().map_err(|e| js_error_text(&e))?;
        gain.gain().set_value(GAIN);
        osc.set_type(oscillator_type(wave));
        osc.frequency().set_value(hz);
        osc.connect_with_audio_node(&gain)
            .map_err(|e| js_error_text(&e))?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(|e| js_error_text(&e))?;
        osc.start().map_err(|e| js_error_text(&e))?;
        Ok(Tone { ctx, osc })
    }

    fn stop(self) {
        let _ = self.osc.stop();
        let _ = self.ctx.close();
    }
}

fn oscillator_type(wave: Waveform) -> web_sys::OscillatorType {
    match wave {
        Waveform::Sine => web_sys::OscillatorType::Sine,
        Waveform::Square => web_sys::OscillatorType::Square,
        Waveform::Sawtooth => web_sys::OscillatorType::Sawtooth,
        Waveform::Triangle => web_sys::OscillatorType::Triangle,
    }
}

#[component]
pub(super) fn WebAudioDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let tone = StoredValue::new_local(None::<Tone>);
    let (frequency, set_frequency) = signal(TONE_DEFAULT_HZ);
    let (waveform, set_waveform) = signal(Waveform::default());
    let (playing, set_playing) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let stop = move || {
        tone.try_update_value(|t| {
            if let Some(t) = t.take() {
                t.stop();
            }
        });
    };
    on_cleanup(stop);

    // Retune the running oscillator without restarting it.
    Effect::new(move |_| {
        let hz = frequency.get();
        let wave = waveform.get();
        tone.with_value(|t| {
            if let Some(t) = t {
                t.osc.frequency().set_value(hz);
                t.osc.set_type(oscillator_type(wave));
            }
        });
    });

    let toggle = move |_| {
        if playing.get_untracked() {
            stop();
            set_playing.set(false);
            return;
        }
        match Tone::start(frequency.get_untracked(), waveform.get_untracked()) {
            Ok(t) => {
                tone.set_value(Some(t));
                set_error.set(None);
                set_playing.set(true);
            }
            Err(e) => set_error.set(Some(format!("無法建立 AudioContext：{e}"))),
        }
    };

    view! {
        <div class=demo_class(open)>
            <div class="demo-controls">
                <button class="btn" on:click=toggle>
                    {move || if playing.get() { "停止" } else { "播放" }}
                </button>
                <select on:change=move |ev| {
                    if let Some(w) = Waveform::from_key(&event_target_value(&ev)) {
                        set_waveform.set(w);
                    }
                }>
                    {Waveform::all()
                        .iter()
                        .map(|w| {
                            view! {
                                <option value=w.key() selected={*w == Waveform::default()}>
                                    {w.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <label class="slider">
                <span>{move || format!("頻率：{:.0} Hz", frequency.get())}</span>
                <input
                    type="range"
                    min=TONE_MIN_HZ.to_string()
                    max=TONE_MAX_HZ.to_string()
                    step="1"
                    prop:value=move || frequency.get().to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        set_frequency.set(clamp_frequency(raw.parse().unwrap_or(f32::NAN)));
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="demo-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <DoneButton on_close=on_close />
        </div>
    }
}
