use leptos::prelude::*;

use webapi_atlas::CloseHandle;

use super::{demo_class, DoneButton};

fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(false)
}

fn now_hms() -> String {
    let d = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        d.get_hours(),
        d.get_minutes(),
        d.get_seconds()
    )
}

#[component]
pub(super) fn OnlineStatusDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let (online, set_online) = signal(is_online());
    let (log, set_log) = signal(Vec::<String>::new());

    let record = move |state: bool| {
        set_online.set(state);
        let label = if state { "恢復連線" } else { "離線" };
        set_log.update(|l| l.insert(0, format!("{} {label}", now_hms())));
    };

    let on = window_event_listener_untyped("online", move |_| record(true));
    let off = window_event_listener_untyped("offline", move |_| record(false));
    on_cleanup(move || {
        on.remove();
        off.remove();
    });

    view! {
        <div class=demo_class(open)>
            <p class=move || if online.get() { "net-state online" } else { "net-state offline" }>
                {move || if online.get() { "目前在線上" } else { "目前離線" }}
            </p>
            <p class="demo-hint">"切換裝置的網路連線（或在開發者工具中模擬離線），狀態會即時更新。"</p>
            <ul class="event-log">
                {move || log.get().into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
            </ul>
            <DoneButton on_close=on_close />
        </div>
    }
}
