use super::*;

// =============================================================
// CancelToken
// =============================================================

#[test]
fn token_starts_uncancelled() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn token_clones_share_flag() {
    let a = CancelToken::new();
    let b = a.clone();
    a.cancel();
    assert!(b.is_cancelled());
}

// =============================================================
// Scheduler
// =============================================================

#[test]
fn first_ticket_is_generation_one() {
    let mut s = Scheduler::new();
    let t = s.begin();
    assert_eq!(t.generation(), 1);
    assert!(s.is_current(&t));
    assert!(s.in_flight());
}

#[test]
fn new_ticket_cancels_previous() {
    let mut s = Scheduler::new();
    let first = s.begin();
    let second = s.begin();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert!(!s.is_current(&first));
    assert!(s.is_current(&second));
}

#[test]
fn stale_ticket_cannot_commit() {
    let mut s = Scheduler::new();
    let first = s.begin();
    let second = s.begin();
    assert!(!s.commit(&first));
    assert!(s.in_flight());
    assert!(s.commit(&second));
    assert!(!s.in_flight());
}

#[test]
fn late_stale_commit_after_newer_commit_is_rejected() {
    let mut s = Scheduler::new();
    let first = s.begin();
    let second = s.begin();
    assert!(s.commit(&second));
    assert!(!s.commit(&first));
    assert!(s.is_current(&second));
}

#[test]
fn commit_clears_in_flight() {
    let mut s = Scheduler::new();
    let t = s.begin();
    assert!(s.commit(&t));
    assert!(!s.in_flight());
    // A committed ticket is not cancelled by the next request.
    let _next = s.begin();
    assert!(!t.is_cancelled());
}

#[test]
fn double_commit_of_same_ticket_is_idempotent() {
    let mut s = Scheduler::new();
    let t = s.begin();
    assert!(s.commit(&t));
    assert!(s.commit(&t));
    assert!(s.is_current(&t));
}

#[test]
fn cancel_all_invalidates_outstanding() {
    let mut s = Scheduler::new();
    let t = s.begin();
    s.cancel_all();
    assert!(t.is_cancelled());
    assert!(!s.is_current(&t));
    assert!(!s.commit(&t));
    assert!(!s.in_flight());
}

#[test]
fn externally_cancelled_ticket_is_not_current() {
    let mut s = Scheduler::new();
    let t = s.begin();
    t.token().cancel();
    assert!(!s.is_current(&t));
    assert!(!s.commit(&t));
}
