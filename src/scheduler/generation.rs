//! Session generations for ignoring stale background work.
//!
//! There is no cancellation token: a background run records the generation
//! it started in and stops acting once the session has moved past it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter bumped on teardown or when a new session context starts.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    counter: Arc<AtomicU64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Invalidate every outstanding ticket. Returns the new generation.
    pub fn advance(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Capture the current generation.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.clone(),
            issued: self.current(),
        }
    }
}

/// Generation captured when a piece of background work started.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    issued: u64,
}

impl Ticket {
    /// Whether the session is still in the generation this ticket was issued for.
    pub fn is_current(&self) -> bool {
        self.generation.current() == self.issued
    }
}
