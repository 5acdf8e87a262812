//! Document pagination state.
//!
//! Pages are 1-based. Until a document is attached the page count is zero and
//! every navigation request is a no-op; once attached, the current page stays
//! within `[1, page_count]`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

/// A page index outside the attached document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page {requested} is outside 1..={page_count}")]
pub struct PageRangeError {
    pub requested: u32,
    pub page_count: u32,
}

/// Current page and total page count of the attached document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: u32,
    page_count: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: 1, page_count: 0 }
    }
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a freshly loaded document and rewind to its first page.
    pub fn reset(&mut self, page_count: u32) {
        self.page_count = page_count;
        self.current = 1;
    }

    /// Forget the attached document.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    #[must_use]
    pub fn has_document(&self) -> bool {
        self.page_count > 0
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.has_document() && self.current > 1
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.current < self.page_count
    }

    /// Validate a page index against the attached document.
    ///
    /// # Errors
    ///
    /// Returns [`PageRangeError`] when `page` is zero or past the last page.
    pub fn check(&self, page: u32) -> Result<(), PageRangeError> {
        if page >= 1 && page <= self.page_count {
            Ok(())
        } else {
            Err(PageRangeError { requested: page, page_count: self.page_count })
        }
    }

    /// Advance one page. Returns `true` if the page changed.
    pub fn next(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one page. Returns `true` if the page changed.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `page`. Returns `true` if the page changed.
    ///
    /// # Errors
    ///
    /// Returns [`PageRangeError`] and leaves the state untouched when `page`
    /// is out of range.
    pub fn go_to(&mut self, page: u32) -> Result<bool, PageRangeError> {
        self.check(page)?;
        let changed = self.current != page;
        self.current = page;
        Ok(changed)
    }
}
