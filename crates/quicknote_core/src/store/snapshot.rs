//! Whole-board snapshot store.
//!
//! # Responsibility
//! - Own the single persisted key and its load/save semantics.
//! - Report classified save failures without ever corrupting live state.
//!
//! # Invariants
//! - The persisted value round-trips byte-for-byte; the store never
//!   interprets snapshot contents.
//! - Every load/save is preceded by a fresh availability probe.

use crate::medium::{MediumError, StorageMedium};
use crate::model::board::Snapshot;
use crate::store::probe::medium_available;
use log::{error, info, warn};
use std::time::Instant;

/// Fixed key the board snapshot is persisted under.
pub const SNAPSHOT_KEY: &str = "notes";

/// Result of a save attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The snapshot reached the medium.
    Persisted,
    /// The medium is unavailable; the write was skipped by contract.
    SkippedUnavailable,
}

/// Store facade over one medium and one key.
pub struct SnapshotStore<M: StorageMedium> {
    medium: M,
}

impl<M: StorageMedium> SnapshotStore<M> {
    /// Creates a store over the provided medium.
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Probes the medium on behalf of session startup.
    pub fn available(&mut self) -> bool {
        medium_available(&mut self.medium)
    }

    /// Reads the persisted snapshot.
    ///
    /// Returns `None` when the medium is unavailable, the key is unset, or
    /// the read fails. A missing snapshot degrades to an empty board, so
    /// failures are logged and absorbed here instead of surfacing.
    pub fn load(&mut self) -> Option<Snapshot> {
        if !medium_available(&mut self.medium) {
            info!("event=snapshot_load module=store status=skip reason=medium_unavailable");
            return None;
        }
        match self.medium.get(SNAPSHOT_KEY) {
            Ok(value) => {
                info!(
                    "event=snapshot_load module=store status=ok present={}",
                    value.is_some()
                );
                value
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=store status=error error_code=load_failed error={err}"
                );
                None
            }
        }
    }

    /// Persists the snapshot, probing availability first.
    ///
    /// Unavailability is a skip, not a failure: the user was already warned
    /// at session start. A rejected write surfaces the classified error.
    pub fn save(&mut self, snapshot: &str) -> Result<SaveOutcome, MediumError> {
        if !medium_available(&mut self.medium) {
            info!("event=snapshot_save module=store status=skip reason=medium_unavailable");
            return Ok(SaveOutcome::SkippedUnavailable);
        }

        let started_at = Instant::now();
        match self.medium.set(SNAPSHOT_KEY, snapshot) {
            Ok(()) => {
                info!(
                    "event=snapshot_save module=store status=ok bytes={} duration_ms={}",
                    snapshot.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(SaveOutcome::Persisted)
            }
            Err(err) => {
                error!(
                    "event=snapshot_save module=store status=error error_code={} error={err}",
                    if err.is_quota() {
                        "quota_exceeded"
                    } else {
                        "backend_failure"
                    }
                );
                Err(err)
            }
        }
    }
}
