use web_sys::window;

use super::error::ViewError;

/// Persistent string key-value store (localStorage in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ViewError>;
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ViewError> {
        let storage = get_local_storage().ok_or(ViewError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| ViewError::Storage(format!("{:?}", e)))
    }
}
