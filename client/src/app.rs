//! Root component and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the view and UI request signals consumed by the shell's panes and
//! the status bar, then renders the two-pane layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::view_shell::ViewShell;
use crate::state::ui::UiState;
use crate::state::view::ViewState;
use crate::util::config;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(view_state);
    provide_context(ui);
    provide_context(StoredValue::new(config::load()));

    let title = move || view_state.get().title();

    view! {
        <Title text=title/>
        <ViewShell/>
    }
}
