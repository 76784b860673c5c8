//! Saved filter view for the clients list.
//!
//! The whole view is the page query string, stored under a single
//! localStorage key. Saving overwrites it, loading navigates back to it.

use crate::shared::error::ViewError;
use crate::shared::location::{BrowserLocation, PageLocation};
use crate::shared::notify::{AlertSink, NotificationSink};
use crate::shared::storage::{BrowserStorage, KeyValueStore};

pub const SAVED_VIEW_STORAGE_KEY: &str = "clients_list_saved_view";
pub const SAVED_MESSAGE: &str = "Saved current filters.";
pub const NOTHING_SAVED_MESSAGE: &str = "No saved view yet.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedViewConfig {
    pub storage_key: String,
    pub saved_message: String,
    pub nothing_saved_message: String,
}

impl Default for SavedViewConfig {
    fn default() -> Self {
        Self {
            storage_key: SAVED_VIEW_STORAGE_KEY.to_string(),
            saved_message: SAVED_MESSAGE.to_string(),
            nothing_saved_message: NOTHING_SAVED_MESSAGE.to_string(),
        }
    }
}

/// Result of a load request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was sent to the stored query string.
    Restored(String),
    NothingSaved,
}

pub struct ViewPersistence<S, L, N> {
    config: SavedViewConfig,
    store: S,
    location: L,
    notifier: N,
}

impl ViewPersistence<BrowserStorage, BrowserLocation, AlertSink> {
    /// Controller over localStorage, `window.location` and `alert`.
    pub fn browser(config: SavedViewConfig) -> Self {
        Self::new(config, BrowserStorage, BrowserLocation, AlertSink)
    }
}

impl<S, L, N> ViewPersistence<S, L, N>
where
    S: KeyValueStore,
    L: PageLocation,
    N: NotificationSink,
{
    pub fn new(config: SavedViewConfig, store: S, location: L, notifier: N) -> Self {
        Self {
            config,
            store,
            location,
            notifier,
        }
    }

    pub fn config(&self) -> &SavedViewConfig {
        &self.config
    }

    /// Store the current query string, replacing any previous view.
    pub fn save_current_view(&self) -> Result<(), ViewError> {
        let query = query_to_store(&self.location.search());
        self.store.set(&self.config.storage_key, &query)?;
        log::debug!("Saved clients list view: {}", query);
        self.notifier.notify(&self.config.saved_message);
        Ok(())
    }

    /// Navigate to the stored query string, or tell the user there is none.
    pub fn load_saved_view(&self) -> Result<LoadOutcome, ViewError> {
        // An empty stored value counts as nothing saved
        let stored = self
            .store
            .get(&self.config.storage_key)
            .filter(|query| !query.is_empty());

        match stored {
            Some(query) => {
                self.location.set_search(&query)?;
                Ok(LoadOutcome::Restored(query))
            }
            None => {
                self.notifier.notify(&self.config.nothing_saved_message);
                Ok(LoadOutcome::NothingSaved)
            }
        }
    }
}

/// `location.search` is empty when the URL has no query; store a bare `?` then.
fn query_to_store(search: &str) -> String {
    if search.is_empty() {
        "?".to_string()
    } else {
        search.to_string()
    }
}
