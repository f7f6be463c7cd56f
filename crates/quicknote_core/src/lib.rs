//! Core domain logic for QuickNote.
//! This crate is the single source of truth for editing and persistence
//! invariants: the live note board, the write-coalescing save path, and the
//! container-level event routing.

pub mod logging;
pub mod medium;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use medium::{MediumError, MemoryMedium, SqliteMedium, StorageMedium};
pub use model::board::{NoteBoard, Snapshot, SnapshotParseError};
pub use model::item::{ItemId, NoteItem};
pub use service::debounce::SaveDebouncer;
pub use service::router::{
    classify_target, EventRouter, RouteOutcome, SurfaceEvent, TargetRole, TargetShape,
};
pub use service::session::{
    NoteSession, TickOutcome, UserNotifier, NO_STORAGE_ALERT, QUOTA_ALERT,
};
pub use store::{medium_available, SaveOutcome, SnapshotStore, SNAPSHOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
