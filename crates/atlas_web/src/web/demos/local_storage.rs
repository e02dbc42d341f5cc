use leptos::prelude::*;

use webapi_atlas::CloseHandle;

use super::{demo_class, DoneButton};
use crate::ui_model::LOCALSTORAGE_NOTE_KEY;
use crate::web::storage::{local_storage_get_string, local_storage_remove, local_storage_set_string};

#[component]
pub(super) fn LocalStorageDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let saved = local_storage_get_string(LOCALSTORAGE_NOTE_KEY);
    let (draft, set_draft) = signal(saved.clone().unwrap_or_default());
    let (status, set_status) = signal(match saved {
        Some(s) => format!("已載入 {} 個字元", s.chars().count()),
        None => "尚無儲存的筆記".to_string(),
    });

    let save = move |_| {
        let text = draft.get_untracked();
        match local_storage_set_string(LOCALSTORAGE_NOTE_KEY, &text) {
            Ok(()) => set_status.set(format!("已儲存 {} 個字元，重新整理頁面後仍會保留", text.chars().count())),
            Err(e) => set_status.set(format!("儲存失敗：{e}")),
        }
    };

    let clear = move |_| {
        local_storage_remove(LOCALSTORAGE_NOTE_KEY);
        set_draft.set(String::new());
        set_status.set("已清除".to_string());
    };

    view! {
        <div class=demo_class(open)>
            <textarea
                class="note"
                rows="6"
                placeholder="在這裡輸入筆記…"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            ></textarea>
            <div class="demo-controls">
                <button class="btn" on:click=save>"儲存"</button>
                <button class="btn ghost" on:click=clear>"清除"</button>
            </div>
            <p class="demo-status">{move || status.get()}</p>
            <DoneButton on_close=on_close />
        </div>
    }
}
