//! Previous/next buttons, page counter and page-jump field.
//!
//! Buttons are disabled at the document bounds so out-of-range navigation is
//! never requested; the jump field's `max` follows the page count.

use leptos::prelude::*;

use crate::state::ui::{PageRequest, UiState, parse_page_input};
use crate::state::view::ViewState;

#[component]
pub fn PageControls() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let jump = RwSignal::new(String::new());

    let on_prev = move |_| ui.update(|u| u.request_page(PageRequest::Prev));
    let on_next = move |_| ui.update(|u| u.request_page(PageRequest::Next));
    let on_jump = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_page_input(&jump.get_untracked()) {
            Some(page) => ui.update(|u| u.request_page(PageRequest::Goto(page))),
            None => leptos::logging::warn!("ignoring page jump: {:?}", jump.get_untracked()),
        }
    };

    let no_document = move || !view_state.with(ViewState::has_document);
    let last_page = move || view_state.with(|v| v.page_count.max(1)).to_string();

    view! {
        <div class="page-controls">
            <button
                class="page-controls__button"
                on:click=on_prev
                disabled=move || !view_state.with(|v| v.can_go_back)
                title="Previous page"
            >
                "Previous"
            </button>
            <span class="page-controls__label">{move || view_state.with(ViewState::page_label)}</span>
            <button
                class="page-controls__button"
                on:click=on_next
                disabled=move || !view_state.with(|v| v.can_go_forward)
                title="Next page"
            >
                "Next"
            </button>
            <form class="page-controls__jump" on:submit=on_jump>
                <input
                    class="page-controls__input"
                    type="number"
                    min="1"
                    max=last_page
                    placeholder="Page"
                    bind:value=jump
                    disabled=no_document
                />
                <button class="page-controls__button" type="submit" disabled=no_document>
                    "Go"
                </button>
            </form>
        </div>
    }
}
