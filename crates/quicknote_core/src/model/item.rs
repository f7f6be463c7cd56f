//! Note item domain model.
//!
//! # Responsibility
//! - Define the canonical item record held by the note board.
//! - Assign stable identifiers at creation time.
//!
//! # Invariants
//! - `id` is unique across the board and never reused.
//! - Content is free text; the core never interprets it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note item on the board.
///
/// UUID v7 values are drawn from a monotonically non-decreasing time source.
/// Ids anchor items for event targeting and removal; no algorithm relies on
/// their ordering.
pub type ItemId = Uuid;

/// A single editable note on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    /// Stable id used for event targeting and removal.
    pub id: ItemId,
    /// Free-text body, mutated in place by the editing surface.
    pub content: String,
}

impl NoteItem {
    /// Creates an item with a freshly allocated id.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::now_v7(), content)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used by rehydration, where identity already exists in the snapshot.
    pub fn with_id(id: ItemId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
