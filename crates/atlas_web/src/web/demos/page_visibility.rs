use leptos::prelude::*;

use web_sys::VisibilityState;
use webapi_atlas::CloseHandle;

use super::{demo_class, DoneButton};

fn current_state() -> Option<VisibilityState> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state())
}

fn state_label(state: Option<VisibilityState>) -> &'static str {
    match state {
        Some(VisibilityState::Visible) => "可見",
        Some(VisibilityState::Hidden) => "隱藏",
        _ => "未知",
    }
}

#[component]
pub(super) fn PageVisibilityDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let (state, set_state) = signal(current_state());
    let (log, set_log) = signal(Vec::<String>::new());
    let started = js_sys::Date::now();

    // visibilitychange is fired at the document and bubbles up to the window.
    let handle = window_event_listener_untyped("visibilitychange", move |_| {
        let now = current_state();
        set_state.set(now);
        let secs = (js_sys::Date::now() - started) / 1000.0;
        set_log.update(|l| l.insert(0, format!("+{secs:.1}s → {}", state_label(now))));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class=demo_class(open)>
            <p class="demo-status">"目前狀態："{move || state_label(state.get())}</p>
            <p class="demo-hint">"切換到其他分頁再回來，變化會記錄在下方。"</p>
            <ul class="event-log">
                {move || log.get().into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
            </ul>
            <DoneButton on_close=on_close />
        </div>
    }
}
