use web_sys::window;

use super::error::ViewError;

/// Query string of the current document.
pub trait PageLocation {
    /// Current query string including the leading `?`, or empty when there is none.
    fn search(&self) -> String;

    /// Replace the query string. In the browser this navigates to the same path.
    fn set_search(&self, query: &str) -> Result<(), ViewError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl PageLocation for BrowserLocation {
    fn search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn set_search(&self, query: &str) -> Result<(), ViewError> {
        let Some(window) = window() else {
            return Err(ViewError::Navigation("window is not available".to_string()));
        };
        window
            .location()
            .set_search(query)
            .map_err(|e| ViewError::Navigation(format!("{:?}", e)))
    }
}
