pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

use domain::clients::ui::list::{bind_saved_view_controls, SavedViewConfig};

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document, saved view controls not bound");
        return;
    };
    bind_saved_view_controls(&document, SavedViewConfig::default());
}
