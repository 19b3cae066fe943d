//! Blocking user-facing dialogs.
//!
//! Mutating actions surface success and failure through the browser's modal
//! alert, keeping the fire-and-refresh flow synchronous from the user's
//! point of view. Off-browser builds (tests) log instead.

/// Blocking message dialog.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {message}");
    }
}

/// Blocking yes/no dialog. Answers yes off-browser so native test drivers
/// are not wedged on a prompt.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("confirm: {message}");
        true
    }
}
