//! Requests from chrome controls to the document host.
//!
//! DESIGN
//! ======
//! Controls never hold the engine. They bump a sequence number here and the
//! host, which owns the engine, reacts to the change in an effect. The
//! sequence numbers make repeated identical requests (two "next" clicks)
//! observable.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A page change asked for by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    Next,
    Prev,
    Goto(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub page_request: Option<PageRequest>,
    pub page_request_seq: u64,
    pub camera_toggle_seq: u64,
    pub reload_seq: u64,
}

impl UiState {
    pub fn request_page(&mut self, request: PageRequest) {
        self.page_request = Some(request);
        self.page_request_seq += 1;
    }

    pub fn request_camera_toggle(&mut self) {
        self.camera_toggle_seq += 1;
    }

    pub fn request_reload(&mut self) {
        self.reload_seq += 1;
    }
}

/// Parse the page-jump field. Blank, zero and non-numeric input are rejected.
pub fn parse_page_input(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(page) => Some(page),
    }
}
