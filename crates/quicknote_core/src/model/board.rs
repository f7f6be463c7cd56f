//! Live note board owned by the editing session.
//!
//! # Responsibility
//! - Hold the ordered, authoritative sequence of note items.
//! - Serialize the whole board into an opaque snapshot string and rehydrate
//!   from one.
//!
//! # Invariants
//! - Item order is insertion order; removal preserves the order of the rest.
//! - Serializing an unchanged board twice yields byte-identical snapshots.
//! - At most one item holds focus, and it is always a present item.

use crate::model::item::{ItemId, NoteItem};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque serialized form of the whole board.
///
/// Produced here, stored verbatim by the snapshot store, never interpreted
/// anywhere in between.
pub type Snapshot = String;

/// A persisted snapshot that does not parse back into a board.
#[derive(Debug)]
pub struct SnapshotParseError(serde_json::Error);

impl Display for SnapshotParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot does not parse: {}", self.0)
    }
}

impl Error for SnapshotParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Ordered board of editable notes plus a focus slot.
///
/// Focus is session state, not document state; it is not part of the
/// persisted form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteBoard {
    items: Vec<NoteItem>,
    focused: Option<ItemId>,
}

impl NoteBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a board from a previously persisted snapshot.
    ///
    /// A rehydrated board starts unfocused.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, SnapshotParseError> {
        let items: Vec<NoteItem> = serde_json::from_str(snapshot).map_err(SnapshotParseError)?;
        Ok(Self {
            items,
            focused: None,
        })
    }

    /// Serializes the current board into the opaque persisted form.
    pub fn to_snapshot(&self) -> Snapshot {
        serde_json::to_string(&self.items).expect("note items serialize to JSON")
    }

    /// Appends a batch of items in one pass, preserving iteration order.
    pub fn append_all(&mut self, items: impl IntoIterator<Item = NoteItem>) {
        self.items.extend(items);
    }

    /// Removes the item with `id`, keeping the order of the remaining items.
    ///
    /// Clears focus when the removed item held it.
    pub fn remove(&mut self, id: ItemId) -> Option<NoteItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(self.items.remove(position))
    }

    /// Replaces the content of the item with `id` in place.
    ///
    /// Returns `false` when no such item exists.
    pub fn set_content(&mut self, id: ItemId, content: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Moves focus to the item with `id`.
    ///
    /// Returns `false` (leaving focus unchanged) when no such item exists.
    pub fn focus(&mut self, id: ItemId) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// Returns the currently focused item, if any.
    pub fn focused(&self) -> Option<ItemId> {
        self.focused
    }

    /// Returns the items in board order.
    pub fn items(&self) -> &[NoteItem] {
        &self.items
    }

    /// Returns the item with `id`, if present.
    pub fn get(&self, id: ItemId) -> Option<&NoteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items on the board.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the board holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
