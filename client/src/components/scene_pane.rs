//! 3D pane: the `<model-viewer>` mount point and the camera interaction toggle.
//!
//! The viewer element itself is created by the document host (it shares the
//! engine) and moved into [`SCENE_MOUNT_ID`] once both panes are in the DOM.

#[cfg(test)]
#[path = "scene_pane_test.rs"]
mod scene_pane_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::state::view::ViewState;

pub const SCENE_MOUNT_ID: &str = "scene-mount";

pub fn camera_toggle_label(enabled: bool) -> &'static str {
    if enabled { "Lock camera" } else { "Unlock camera" }
}

pub fn camera_toggle_title(enabled: bool) -> &'static str {
    if enabled {
        "Stop the model from reacting to drag and orbit input"
    } else {
        "Let the model react to drag and orbit input"
    }
}

#[component]
pub fn ScenePane() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let enabled = move || view_state.with(|v| v.camera_interaction);
    let on_toggle = move |_| ui.update(UiState::request_camera_toggle);

    view! {
        <div class="scene-pane">
            <div class="scene-pane__toolbar">
                <button
                    class="scene-pane__toggle"
                    class:scene-pane__toggle--active=enabled
                    aria-pressed=move || enabled().to_string()
                    title=move || camera_toggle_title(enabled())
                    on:click=on_toggle
                >
                    {move || camera_toggle_label(enabled())}
                </button>
            </div>
            <div id=SCENE_MOUNT_ID class="scene-pane__mount"></div>
        </div>
    }
}
