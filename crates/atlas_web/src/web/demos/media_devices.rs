use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use webapi_atlas::CloseHandle;

use super::{demo_class, js_error_text, DoneButton};

fn stop_tracks(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

async fn request_camera() -> Result<web_sys::MediaStream, String> {
    let devices = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .media_devices()
        .map_err(|e| js_error_text(&e))?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| js_error_text(&e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| js_error_text(&e))?
        .dyn_into::<web_sys::MediaStream>()
        .map_err(|_| "getUserMedia did not return a MediaStream".to_string())
}

async fn list_devices() -> Result<Vec<String>, String> {
    let devices = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .media_devices()
        .map_err(|e| js_error_text(&e))?;
    let promise = devices.enumerate_devices().map_err(|e| js_error_text(&e))?;
    let list = JsFuture::from(promise)
        .await
        .map_err(|e| js_error_text(&e))?
        .dyn_into::<js_sys::Array>()
        .map_err(|_| "enumerateDevices did not return an array".to_string())?;

    let mut out = Vec::new();
    for info in list.iter() {
        let Ok(info) = info.dyn_into::<web_sys::MediaDeviceInfo>() else {
            continue;
        };
        let kind = match info.kind() {
            web_sys::MediaDeviceKind::Videoinput => "攝影機",
            web_sys::MediaDeviceKind::Audioinput => "麥克風",
            web_sys::MediaDeviceKind::Audiooutput => "喇叭",
            _ => "其他",
        };
        // Labels stay empty until the page has been granted access.
        let label = info.label();
        let label = if label.is_empty() { "（未授權）".to_string() } else { label };
        out.push(format!("{kind}：{label}"));
    }
    Ok(out)
}

#[component]
pub(super) fn MediaDevicesDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    let stream = StoredValue::new_local(None::<web_sys::MediaStream>);
    let (status, set_status) = signal("尚未啟動攝影機".to_string());
    let (devices, set_devices) = signal(Vec::<String>::new());

    let stop = move || {
        stream.try_update_value(|s| {
            if let Some(s) = s.take() {
                stop_tracks(&s);
            }
        });
        if let Some(video) = video_ref.try_get_untracked().flatten() {
            video.set_src_object(None);
        }
    };

    on_cleanup(stop);

    let start = move |_| {
        set_status.set("正在請求攝影機權限…".to_string());
        spawn_local(async move {
            match request_camera().await {
                Ok(s) => {
                    stop();
                    if let Some(video) = video_ref.try_get_untracked().flatten() {
                        video.set_src_object(Some(&s));
                        if let Ok(p) = video.play() {
                            let _ = JsFuture::from(p).await;
                        }
                    }
                    // The widget may have closed while permission was pending.
                    if stream.try_update_value(|slot| *slot = Some(s.clone())).is_none() {
                        stop_tracks(&s);
                        return;
                    }
                    set_status.try_set("攝影機運作中".to_string());
                }
                Err(e) => {
                    set_status.try_set(format!("無法取得攝影機：{e}"));
                }
            }
            match list_devices().await {
                Ok(list) => {
                    set_devices.try_set(list);
                }
                Err(e) => crate::web::console_warn(&format!("enumerateDevices failed: {e}")),
            }
        });
    };

    let stop_click = move |_| {
        stop();
        set_status.set("攝影機已停止".to_string());
    };

    view! {
        <div class=demo_class(open)>
            <video class="camera-preview" node_ref=video_ref autoplay=true muted=true playsinline=true></video>
            <div class="demo-controls">
                <button class="btn" on:click=start>"啟動攝影機"</button>
                <button class="btn ghost" on:click=stop_click>"停止"</button>
            </div>
            <p class="demo-status">{move || status.get()}</p>
            <ul class="device-list">
                {move || devices.get().into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
            </ul>
            <DoneButton on_close=on_close />
        </div>
    }
}
