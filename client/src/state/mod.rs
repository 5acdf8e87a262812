//! Reactive client state.
//!
//! `view` mirrors what the engine last published; `ui` carries requests from
//! chrome controls to the engine host.

pub mod ui;
pub mod view;
