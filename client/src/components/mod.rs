//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the two panes and their chrome while reading/writing
//! shared state from Leptos context providers. Only `document_host` touches
//! the engine.

pub mod document_host;
pub mod page_controls;
pub mod scene_pane;
pub mod status_bar;
pub mod view_shell;
