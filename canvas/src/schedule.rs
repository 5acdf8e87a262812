//! Generation-ordered request scheduling for asynchronous loads and renders.
//!
//! Every request gets a [`Ticket`] carrying a monotonically increasing
//! generation and a [`CancelToken`]. Issuing a new ticket cancels the previous
//! one, so superseded work can stop at its next suspension point, and only the
//! newest ticket may commit. This gives last-submitted-wins ordering on a
//! single-threaded event loop without locks.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Handle for one scheduled request.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    token: CancelToken,
}

impl Ticket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Whether a newer request (or an explicit cancel) has superseded this one.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Issues tickets for one resource (a surface, or the document slot).
#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    active: Option<CancelToken>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, cancelling whichever request was in flight.
    pub fn begin(&mut self) -> Ticket {
        self.cancel_active();
        self.generation += 1;
        let token = CancelToken::new();
        self.active = Some(token.clone());
        Ticket { generation: self.generation, token }
    }

    /// `true` if `ticket` is the newest request and has not been cancelled.
    #[must_use]
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && !ticket.is_cancelled()
    }

    /// Mark `ticket` as completed. Returns `false` (and changes nothing) for a
    /// stale or cancelled ticket.
    pub fn commit(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.active = None;
        true
    }

    /// Cancel the in-flight request, if any, and invalidate every outstanding ticket.
    pub fn cancel_all(&mut self) {
        self.cancel_active();
        self.generation += 1;
    }

    /// Whether a request is still awaiting commit.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.active.is_some()
    }

    fn cancel_active(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }
}
