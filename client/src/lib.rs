//! Leptos front end for BimLinker: a PDF floor plan beside a 3D model.
//!
//! ARCHITECTURE
//! ============
//! `canvas::engine::Engine` owns page state, render ordering and the viewer
//! handle. Components here are thin: they hold the engine in a host
//! component, forward DOM events to it, and mirror its published
//! `ViewSnapshot` into a signal the rest of the chrome reads.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("bimlinker client starting");
    leptos::mount::mount_to_body(app::App);
}
