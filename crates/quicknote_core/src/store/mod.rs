//! Snapshot persistence over the storage medium.
//!
//! # Responsibility
//! - Gate every medium access behind the availability probe.
//! - Load and save the whole-board snapshot under its fixed key.
//!
//! # Invariants
//! - `load` never propagates a failure; absence and failure are equivalent.
//! - `save` treats an unavailable medium as a skip, not an error.

pub mod probe;
pub mod snapshot;

pub use probe::medium_available;
pub use snapshot::{SaveOutcome, SnapshotStore, SNAPSHOT_KEY};
