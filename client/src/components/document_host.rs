//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The host creates the engine once its `<canvas>` mounts, attaches the
//! `<model-viewer>` for the scene pane, and starts the document load. From
//! then on it forwards clicks and `UiState` requests to the engine and lets
//! the engine's observer publish `ViewState`.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use canvas::config::ViewerConfig;
#[cfg(feature = "csr")]
use canvas::engine::{Engine, ViewSnapshot};
#[cfg(feature = "csr")]
use canvas::viewer::ModelViewer;

#[cfg(feature = "csr")]
use crate::components::scene_pane::SCENE_MOUNT_ID;
#[cfg(feature = "csr")]
use crate::state::ui::PageRequest;
use crate::state::ui::UiState;
use crate::state::view::ViewState;
#[cfg(feature = "csr")]
use crate::util::driver::{self, SharedEngine};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
fn attach_scene(engine: &mut Engine, config: &ViewerConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; 3D viewer disabled");
        return;
    };
    let viewer = match ModelViewer::create(&document, config) {
        Ok(viewer) => viewer,
        Err(err) => {
            log::warn!("3D viewer unavailable: {err}");
            return;
        }
    };
    if let Err(err) = engine.attach_viewer(viewer) {
        log::warn!("3D viewer attach failed: {err}");
    }
}

/// Document pane canvas.
///
/// Mounts `canvas::engine::Engine` on the `<canvas>`, loads the configured
/// PDF and renders pages and the click marker into it.
#[component]
pub fn DocumentHost() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let empty = move || view_state.with(|v| v.load_failed() || !v.has_document());
    let empty_text = move || view_state.with(|v| if v.load_failed() { v.status_label() } else { String::new() });

    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let config = expect_context::<StoredValue<ViewerConfig>>();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let config = config.get_value();
            let mut instance = Engine::new(canvas, config.clone());
            instance.subscribe(Box::new(move |snap: &ViewSnapshot| view_state.set(ViewState::from(snap))));
            attach_scene(&mut instance, &config);
            *engine.borrow_mut() = Some(instance);

            driver::mount_scene_soon(&engine, SCENE_MOUNT_ID);
            driver::start_load(&engine);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let page_seq = Memo::new(move |_| ui.with(|u| u.page_request_seq));
        Effect::new(move || {
            if page_seq.get() == 0 {
                return;
            }
            let Some(request) = ui.with_untracked(|u| u.page_request) else {
                return;
            };
            driver::apply(&engine, |e| match request {
                PageRequest::Next => e.next_page(),
                PageRequest::Prev => e.prev_page(),
                PageRequest::Goto(page) => e.go_to_page(page).unwrap_or_else(|err| {
                    log::warn!("{err}");
                    Vec::new()
                }),
            });
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let camera_seq = Memo::new(move |_| ui.with(|u| u.camera_toggle_seq));
        Effect::new(move || {
            if camera_seq.get() == 0 {
                return;
            }
            driver::apply(&engine, Engine::toggle_camera_interaction);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let reload_seq = Memo::new(move |_| ui.with(|u| u.reload_seq));
        Effect::new(move || {
            if reload_seq.get() == 0 {
                return;
            }
            driver::start_load(&engine);
        });
    }

    let on_click = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                driver::apply(&engine, |e| {
                    e.on_click(f64::from(ev.client_x()), f64::from(ev.client_y()), ev.button())
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="document-host">
            <canvas class="document-host__surface" node_ref=canvas_ref on:click=on_click>
                "Your browser does not support canvas."
            </canvas>
            <Show when=empty>
                <div class="document-host__empty">
                    <span>{empty_text}</span>
                    <Show when=move || view_state.with(ViewState::load_failed)>
                        <button class="document-host__retry" on:click=move |_| ui.update(UiState::request_reload)>
                            "Reload"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
