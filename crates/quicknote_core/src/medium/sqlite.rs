//! SQLite-backed key-value medium.
//!
//! # Responsibility
//! - Provide the durable production medium behind `StorageMedium`.
//! - Map SQLite failure codes onto the medium error classification.
//!
//! # Invariants
//! - Connections returned by the constructors have the `kv` schema applied.
//! - `SQLITE_FULL` maps to `MediumError::QuotaExceeded`; every other failure
//!   maps to `MediumError::Backend`.

use super::{MediumError, MediumResult, StorageMedium};
use log::{error, info};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const KV_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Durable medium over a single-table SQLite store.
pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    /// Opens a file-backed medium and applies the schema.
    ///
    /// # Side effects
    /// - Emits `medium_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> MediumResult<Self> {
        let started_at = Instant::now();
        info!("event=medium_open module=medium status=start mode=file");

        match Connection::open(path).map_err(classify).and_then(Self::bootstrap) {
            Ok(medium) => {
                info!(
                    "event=medium_open module=medium status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(medium)
            }
            Err(err) => {
                error!(
                    "event=medium_open module=medium status=error mode=file duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory medium and applies the schema.
    pub fn open_in_memory() -> MediumResult<Self> {
        let started_at = Instant::now();
        info!("event=medium_open module=medium status=start mode=memory");

        match Connection::open_in_memory()
            .map_err(classify)
            .and_then(Self::bootstrap)
        {
            Ok(medium) => {
                info!(
                    "event=medium_open module=medium status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(medium)
            }
            Err(err) => {
                error!(
                    "event=medium_open module=medium status=error mode=memory duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    fn bootstrap(conn: Connection) -> MediumResult<Self> {
        conn.execute_batch(KV_SCHEMA).map_err(classify)?;
        conn.busy_timeout(Duration::from_secs(5)).map_err(classify)?;
        Ok(Self { conn })
    }
}

impl StorageMedium for SqliteMedium {
    fn get(&self, key: &str) -> MediumResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(classify)
    }

    fn set(&mut self, key: &str, value: &str) -> MediumResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
                params![key, value],
            )
            .map(|_| ())
            .map_err(classify)
    }

    fn remove(&mut self, key: &str) -> MediumResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", [key])
            .map(|_| ())
            .map_err(classify)
    }
}

/// Maps a SQLite failure onto the medium taxonomy.
fn classify(err: rusqlite::Error) -> MediumError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::DiskFull => {
            MediumError::QuotaExceeded
        }
        _ => MediumError::Backend(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, SqliteMedium};
    use crate::medium::StorageMedium;

    #[test]
    fn classify_maps_full_database_to_quota() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
            Some("database or disk is full".to_string()),
        );
        assert!(classify(err).is_quota());
    }

    #[test]
    fn classify_keeps_other_failures_as_backend() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert!(!classify(err).is_quota());
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let mut medium = SqliteMedium::open_in_memory().expect("in-memory open should succeed");

        medium.set("k", "v1").expect("set should succeed");
        assert_eq!(medium.get("k").expect("get should succeed").as_deref(), Some("v1"));

        medium.set("k", "v2").expect("overwrite should succeed");
        assert_eq!(medium.get("k").expect("get should succeed").as_deref(), Some("v2"));

        medium.remove("k").expect("remove should succeed");
        assert_eq!(medium.get("k").expect("get should succeed"), None);
    }

    #[test]
    fn remove_of_missing_key_is_not_an_error() {
        let mut medium = SqliteMedium::open_in_memory().expect("in-memory open should succeed");
        medium.remove("missing").expect("remove of unset key should succeed");
    }
}
