use crate::ui_model::{PersistedSettings, Theme, LOCALSTORAGE_SETTINGS_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(super) fn local_storage_set_string(key: &str, value: &str) -> Result<(), String> {
    let s = local_storage().ok_or("localStorage unavailable")?;
    s.set_item(key, value)
        .map_err(|_| "set_item() threw (quota exceeded or storage disabled)".to_string())
}

pub(super) fn local_storage_remove(key: &str) {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(key);
    }
}

pub(super) fn load_settings() -> PersistedSettings {
    PersistedSettings::parse(local_storage_get_string(LOCALSTORAGE_SETTINGS_KEY).as_deref())
}

pub(super) fn save_settings(settings: &PersistedSettings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        if let Err(e) = local_storage_set_string(LOCALSTORAGE_SETTINGS_KEY, &raw) {
            super::console_warn(&format!("settings not saved: {e}"));
        }
    }
}

pub(super) fn apply_theme_to_document(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.document_element() else {
        return;
    };
    let _ = el.set_attribute("data-theme", theme.as_attr());
}
