use thiserror::Error;

/// Failures at the browser seams of the saved view controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("failed to write to localStorage: {0}")]
    Storage(String),
    #[error("failed to navigate: {0}")]
    Navigation(String),
}
