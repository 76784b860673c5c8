use web_sys::window;

/// Shows a short message to the user.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert` dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertSink;

impl NotificationSink for AlertSink {
    fn notify(&self, message: &str) {
        let Some(window) = window() else { return };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
