//! Key-value persistence medium abstraction.
//!
//! # Responsibility
//! - Define the synchronous string key-value capability the snapshot store
//!   writes through.
//! - Classify write rejections into quota exhaustion vs. other backend
//!   failures.
//!
//! # Invariants
//! - Medium calls run to completion synchronously; no operation blocks on
//!   external progress.
//! - `MediumError::QuotaExceeded` is reserved for capacity exhaustion.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryMedium;
pub use sqlite::SqliteMedium;

pub type MediumResult<T> = Result<T, MediumError>;

/// Failure classification for medium operations.
#[derive(Debug)]
pub enum MediumError {
    /// The medium rejected a write because its capacity is exhausted.
    QuotaExceeded,
    /// Any other backend failure, carried as a diagnostic message.
    Backend(String),
}

impl MediumError {
    /// Returns whether this failure is quota exhaustion.
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded)
    }
}

impl Display for MediumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded => write!(f, "storage quota exceeded"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for MediumError {}

/// Synchronous string key-value capability consumed by the snapshot store.
///
/// `get` must be side-effect free; `set` and `remove` take `&mut self`
/// because media mutate internal state on writes.
pub trait StorageMedium {
    fn get(&self, key: &str) -> MediumResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> MediumResult<()>;
    fn remove(&mut self, key: &str) -> MediumResult<()>;
}
