pub mod controls;
pub mod saved_view;

pub use controls::{bind_saved_view_controls, BindState, SavedViewControls};
pub use saved_view::{LoadOutcome, SavedViewConfig, ViewPersistence};
