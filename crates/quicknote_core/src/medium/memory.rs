//! In-memory medium.
//!
//! # Responsibility
//! - Back non-persistent sessions and deterministic tests with a map-based
//!   medium that never fails.

use super::{MediumResult, StorageMedium};
use std::collections::HashMap;

/// HashMap-backed medium.
///
/// Used when the session runs without durable storage and by callers that
/// need a medium with no failure modes.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
}

impl MemoryMedium {
    /// Creates an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the medium holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> MediumResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> MediumResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
