use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use web_sys::{Notification, NotificationOptions, NotificationPermission};
use webapi_atlas::CloseHandle;

use super::{demo_class, js_error_text, DoneButton};

fn permission_label(p: NotificationPermission) -> &'static str {
    match p {
        NotificationPermission::Granted => "已允許",
        NotificationPermission::Denied => "已封鎖",
        _ => "尚未決定",
    }
}

fn notify(count: u32) -> Result<(), String> {
    let opts = NotificationOptions::new();
    opts.set_body(&format!("這是第 {count} 則示範通知"));
    opts.set_tag("webapi-atlas-demo");
    Notification::new_with_options("Web API 展示目錄", &opts)
        .map(|_| ())
        .map_err(|e| js_error_text(&e))
}

#[component]
pub(super) fn NotificationsDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let (permission, set_permission) = signal(Notification::permission());
    let (status, set_status) = signal(String::new());
    let sent = StoredValue::new(0_u32);

    let request = move |_| {
        let promise = match Notification::request_permission() {
            Ok(p) => p,
            Err(e) => {
                set_status.set(format!("無法請求權限：{}", js_error_text(&e)));
                return;
            }
        };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                set_status.try_set(format!("請求權限失敗：{}", js_error_text(&e)));
            }
            set_permission.try_set(Notification::permission());
        });
    };

    let send = move |_| {
        if permission.get_untracked() != NotificationPermission::Granted {
            set_status.set("請先允許通知權限".to_string());
            return;
        }
        sent.update_value(|n| *n += 1);
        match notify(sent.get_value()) {
            Ok(()) => set_status.set("通知已送出".to_string()),
            Err(e) => set_status.set(format!("通知失敗：{e}")),
        }
    };

    view! {
        <div class=demo_class(open)>
            <p class="demo-status">
                "通知權限："{move || permission_label(permission.get())}
            </p>
            <div class="demo-controls">
                <Show when=move || permission.get() == NotificationPermission::Default>
                    <button class="btn" on:click=request>"請求權限"</button>
                </Show>
                <button
                    class="btn"
                    disabled=move || permission.get() != NotificationPermission::Granted
                    on:click=send
                >
                    "發送通知"
                </button>
            </div>
            <p class="demo-status">{move || status.get()}</p>
            <DoneButton on_close=on_close />
        </div>
    }
}
