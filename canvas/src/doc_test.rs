use super::*;

fn loaded(pages: u32) -> PageState {
    let mut state = PageState::new();
    state.reset(pages);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_document() {
    let state = PageState::default();
    assert_eq!(state.current(), 1);
    assert_eq!(state.page_count(), 0);
    assert!(!state.has_document());
    assert!(!state.can_go_back());
    assert!(!state.can_go_forward());
}

#[test]
fn navigation_without_document_is_noop() {
    let mut state = PageState::new();
    assert!(!state.next());
    assert!(!state.prev());
    assert_eq!(state.current(), 1);
}

#[test]
fn reset_rewinds_to_first_page() {
    let mut state = loaded(5);
    state.next();
    state.next();
    state.reset(3);
    assert_eq!(state.current(), 1);
    assert_eq!(state.page_count(), 3);
}

#[test]
fn clear_forgets_document() {
    let mut state = loaded(4);
    state.next();
    state.clear();
    assert_eq!(state, PageState::default());
}

// =============================================================
// Clamped navigation
// =============================================================

#[test]
fn prev_at_first_page_stays() {
    let mut state = loaded(3);
    assert!(!state.prev());
    assert_eq!(state.current(), 1);
}

#[test]
fn next_at_last_page_stays() {
    let mut state = loaded(2);
    assert!(state.next());
    assert!(!state.next());
    assert_eq!(state.current(), 2);
}

#[test]
fn single_page_document_cannot_move() {
    let mut state = loaded(1);
    assert!(!state.can_go_back());
    assert!(!state.can_go_forward());
    assert!(!state.next());
    assert!(!state.prev());
}

#[test]
fn next_then_prev_round_trips() {
    let mut state = loaded(3);
    assert!(state.next());
    assert_eq!(state.current(), 2);
    assert!(state.can_go_back());
    assert!(state.prev());
    assert_eq!(state.current(), 1);
}

// =============================================================
// go_to / check
// =============================================================

#[test]
fn go_to_in_range() {
    let mut state = loaded(10);
    assert_eq!(state.go_to(7), Ok(true));
    assert_eq!(state.current(), 7);
    assert_eq!(state.go_to(7), Ok(false));
}

#[test]
fn go_to_zero_is_range_error() {
    let mut state = loaded(10);
    assert_eq!(state.go_to(0), Err(PageRangeError { requested: 0, page_count: 10 }));
    assert_eq!(state.current(), 1);
}

#[test]
fn go_to_past_end_is_range_error() {
    let mut state = loaded(3);
    state.next();
    assert_eq!(state.go_to(4), Err(PageRangeError { requested: 4, page_count: 3 }));
    assert_eq!(state.current(), 2);
}

#[test]
fn check_without_document_rejects_everything() {
    let state = PageState::new();
    assert!(state.check(1).is_err());
}

#[test]
fn range_error_message_names_bounds() {
    let err = PageRangeError { requested: 9, page_count: 4 };
    assert_eq!(err.to_string(), "page 9 is outside 1..=4");
}
