// Thin wrappers over blocking window dialogs.

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        if w.alert_with_message(message).is_err() {
            web_sys::console::warn_1(&format!("alert suppressed: {}", message).into());
        }
    }
}
