use leptos::prelude::*;
use wasm_bindgen::JsValue;

use webapi_atlas::CloseHandle;

use super::{demo_class, DoneButton};
use crate::ui_model::{vibration_presets, VibrationPattern};

fn vibrate(pattern: &VibrationPattern) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let arr = js_sys::Array::new();
    for &ms in pattern.durations_ms {
        arr.push(&JsValue::from(ms));
    }
    window.navigator().vibrate_with_pattern(&arr)
}

fn cancel() {
    if let Some(window) = web_sys::window() {
        window.navigator().vibrate_with_duration(0);
    }
}

#[component]
pub(super) fn VibrationDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let (status, set_status) = signal("選擇一種震動模式".to_string());

    on_cleanup(cancel);

    let presets = vibration_presets()
        .iter()
        .map(|p| {
            view! {
                <button
                    class="btn"
                    on:click=move |_| {
                        if vibrate(p) {
                            set_status.set(format!("{}：共 {} 毫秒", p.label, p.total_ms()));
                        } else {
                            set_status.set("瀏覽器拒絕了震動請求（裝置不支援或尚未與頁面互動）".to_string());
                        }
                    }
                >
                    {p.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=demo_class(open)>
            <div class="demo-controls">
                {presets}
                <button
                    class="btn ghost"
                    on:click=move |_| {
                        cancel();
                        set_status.set("已停止".to_string());
                    }
                >
                    "停止"
                </button>
            </div>
            <p class="demo-status">{move || status.get()}</p>
            <DoneButton on_close=on_close />
        </div>
    }
}
