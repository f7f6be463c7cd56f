//! Trailing-edge save debouncer.
//!
//! # Responsibility
//! - Coalesce bursts of save requests into a single deferred fire.
//! - Hold at most one pending deadline; a new request supersedes the old one.
//!
//! # Invariants
//! - `request` schedules relative to the latest call, never the first.
//! - Firing and cancellation both leave no pending deadline behind.
//! - The debouncer never samples the clock itself; callers inject `now`.

use std::time::{Duration, Instant};

/// Single-slot deadline that coalesces save requests.
///
/// The session serializes the board only when a fire is due, so the
/// persisted snapshot reflects board state at fire time, not at request
/// time. There is no queue behind the slot: intermediate states between two
/// fires are intentionally unpersisted because the producer re-reads live
/// state.
#[derive(Debug)]
pub struct SaveDebouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl SaveDebouncer {
    /// Default quiet interval between the last mutation and the save.
    pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

    /// Creates a debouncer with the given quiet interval.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Schedules a fire `quiet` after `now`, superseding any pending one.
    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns whether a fire is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns whether the scheduled fire is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consumes the deadline when due; returns whether a fire happened.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Drops any pending deadline (session teardown path).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_QUIET)
    }
}
