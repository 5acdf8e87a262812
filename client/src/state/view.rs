//! Engine telemetry mirrored into Leptos state.
//!
//! ARCHITECTURE
//! ============
//! The document host subscribes to the engine and copies every published
//! `ViewSnapshot` into an `RwSignal<ViewState>`. Chrome (page controls,
//! status bar, window title) renders from this copy and never touches the
//! engine directly.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use canvas::engine::{LoadStatus, Selection, ViewSnapshot};

/// Last published engine state, plus label helpers for the chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub page: u32,
    pub page_count: u32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub selection: Option<Selection>,
    pub camera_interaction: bool,
    pub load_status: LoadStatus,
    pub rendering: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: 0,
            can_go_back: false,
            can_go_forward: false,
            selection: None,
            camera_interaction: true,
            load_status: LoadStatus::Idle,
            rendering: false,
        }
    }
}

impl From<&ViewSnapshot> for ViewState {
    fn from(snap: &ViewSnapshot) -> Self {
        Self {
            page: snap.page,
            page_count: snap.page_count,
            can_go_back: snap.can_go_back,
            can_go_forward: snap.can_go_forward,
            selection: snap.selection,
            camera_interaction: snap.camera_interaction,
            load_status: snap.load_status.clone(),
            rendering: snap.rendering,
        }
    }
}

impl ViewState {
    pub fn has_document(&self) -> bool {
        self.page_count > 0
    }

    pub fn load_failed(&self) -> bool {
        matches!(self.load_status, LoadStatus::Failed(_))
    }

    /// "Page 2 / 5", or placeholders before a document is open.
    pub fn page_label(&self) -> String {
        if self.has_document() {
            format!("Page {} / {}", self.page, self.page_count)
        } else {
            "Page - / -".to_owned()
        }
    }

    pub fn surface_label(&self) -> String {
        match self.selection {
            Some(sel) => format!("{:.0}, {:.0} px", sel.surface.x, sel.surface.y),
            None => "--".to_owned(),
        }
    }

    pub fn model_label(&self) -> String {
        match self.selection {
            Some(sel) => format!("{:.2}, {:.2}, {:.2} m", sel.model.x, sel.model.y, sel.model.z),
            None => "--".to_owned(),
        }
    }

    /// Short load/render status; empty when there is nothing to report.
    pub fn status_label(&self) -> String {
        match &self.load_status {
            LoadStatus::Idle => String::new(),
            LoadStatus::Loading => "Loading document...".to_owned(),
            LoadStatus::Failed(reason) => format!("Document unavailable: {reason}"),
            LoadStatus::Ready if self.rendering => format!("Rendering page {}", self.page),
            LoadStatus::Ready => String::new(),
        }
    }

    pub fn title(&self) -> String {
        if self.has_document() {
            format!("BimLinker - page {}/{}", self.page, self.page_count)
        } else {
            "BimLinker".to_owned()
        }
    }
}
