use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use super::saved_view::{LoadOutcome, SavedViewConfig, ViewPersistence};
use crate::shared::location::PageLocation;
use crate::shared::notify::NotificationSink;
use crate::shared::storage::KeyValueStore;

pub const SAVE_VIEW_ID: &str = "save-view";
pub const LOAD_VIEW_ID: &str = "load-view";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindState {
    Bound,
    /// At least one of the buttons is missing; the page has no saved view feature.
    NotBound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Save,
    Load,
}

/// Attach both controls, or none of them if either is missing.
pub fn bind_controls<E>(
    save: Option<E>,
    load: Option<E>,
    mut attach: impl FnMut(E, ControlAction),
) -> BindState {
    let (Some(save), Some(load)) = (save, load) else {
        return BindState::NotBound;
    };
    attach(save, ControlAction::Save);
    attach(load, ControlAction::Load);
    BindState::Bound
}

/// Click handler body. Errors end up in the console, not in front of the user.
pub fn run_action<S, L, N>(persistence: &ViewPersistence<S, L, N>, action: ControlAction)
where
    S: KeyValueStore,
    L: PageLocation,
    N: NotificationSink,
{
    match action {
        ControlAction::Save => {
            if let Err(err) = persistence.save_current_view() {
                log::error!("Failed to save clients list view: {}", err);
            }
        }
        ControlAction::Load => match persistence.load_saved_view() {
            Ok(LoadOutcome::Restored(query)) => {
                log::debug!("Restoring clients list view: {}", query);
            }
            Ok(LoadOutcome::NothingSaved) => {}
            Err(err) => log::error!("Failed to load clients list view: {}", err),
        },
    }
}

/// Wire the `save-view` / `load-view` buttons already present in the page markup.
pub fn bind_saved_view_controls(document: &Document, config: SavedViewConfig) -> BindState {
    let state = bind_controls(
        document.get_element_by_id(SAVE_VIEW_ID),
        document.get_element_by_id(LOAD_VIEW_ID),
        |element, action| {
            let persistence = ViewPersistence::browser(config.clone());
            let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
                run_action(&persistence, action);
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Err(e) =
                element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach {:?} handler: {:?}", action, e);
            }
            // Buttons live as long as the page
            on_click.forget();
        },
    );

    if state == BindState::NotBound {
        log::debug!("Saved view controls are not on this page");
    }
    state
}

/// Save/load buttons for list pages rendered by Leptos.
#[component]
pub fn SavedViewControls(
    /// Storage key and messages; the clients list defaults when omitted
    #[prop(optional)]
    config: Option<SavedViewConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let save_config = config.clone();

    let on_save = move |_: MouseEvent| {
        run_action(
            &ViewPersistence::browser(save_config.clone()),
            ControlAction::Save,
        );
    };
    let on_load = move |_: MouseEvent| {
        run_action(&ViewPersistence::browser(config.clone()), ControlAction::Load);
    };

    view! {
        <div class="saved-view-controls">
            <button id=SAVE_VIEW_ID type="button" class="button button--secondary" on:click=on_save>
                "Save view"
            </button>
            <button id=LOAD_VIEW_ID type="button" class="button button--secondary" on:click=on_load>
                "Load view"
            </button>
        </div>
    }
}
