//! Bottom status bar showing the page counter, the last click and its 3D position.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads only `ViewState`, so it updates whenever the engine publishes.

use leptos::prelude::*;

use crate::state::view::ViewState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    let page = move || view_state.with(ViewState::page_label);
    let surface = move || view_state.with(ViewState::surface_label);
    let model = move || view_state.with(ViewState::model_label);
    let status = move || view_state.with(ViewState::status_label);

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item">{page}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item" title="Click position on the page">"PDF " {surface}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item" title="Mapped position in the model">"3D " {model}</span>
            </div>
            <div class="status-bar__section status-bar__section--right">
                <span class="status-bar__item">{status}</span>
            </div>
        </div>
    }
}
