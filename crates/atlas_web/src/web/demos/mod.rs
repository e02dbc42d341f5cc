//! One self-contained widget per demo. Each owns its browser resources and
//! releases them on cleanup, so closing the overlay is always enough.

use leptos::prelude::*;

use webapi_atlas::{CloseHandle, DemoId};

mod canvas;
mod local_storage;
mod media_devices;
mod notifications;
mod online_status;
mod page_visibility;
mod vibration;
mod web_audio;

pub(super) fn mount(demo: DemoId, open: bool, on_close: CloseHandle) -> AnyView {
    match demo {
        DemoId::MediaDevices => {
            view! { <media_devices::MediaDevicesDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::WebAudio => {
            view! { <web_audio::WebAudioDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::LocalStorage => {
            view! { <local_storage::LocalStorageDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::Vibration => {
            view! { <vibration::VibrationDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::Canvas => view! { <canvas::CanvasDemo open=open on_close=on_close /> }.into_any(),
        DemoId::OnlineStatus => {
            view! { <online_status::OnlineStatusDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::Notifications => {
            view! { <notifications::NotificationsDemo open=open on_close=on_close /> }.into_any()
        }
        DemoId::PageVisibility => {
            view! { <page_visibility::PageVisibilityDemo open=open on_close=on_close /> }
                .into_any()
        }
    }
}

fn demo_class(open: bool) -> &'static str {
    if open {
        "demo open"
    } else {
        "demo"
    }
}

/// Footer shared by every widget; the widget's own way out.
#[component]
fn DoneButton(on_close: CloseHandle) -> impl IntoView {
    view! {
        <div class="demo-footer">
            <button class="btn" on:click=move |_| on_close.close()>
                "完成"
            </button>
        </div>
    }
}

fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}
