//! Snapshot storage trait definitions

use crate::graph::Triple;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt snapshot row: {0}")]
    Corrupt(String),

    #[error("Date parsing error: {0}")]
    DateParse(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Metadata recorded alongside a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    /// File the triples were parsed from
    pub source: String,
    pub triple_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// A persisted copy of the parsed registry graph
pub trait TripleSnapshot {
    /// Replace the stored snapshot with `triples`; returns how many were stored
    fn save_triples(&self, triples: &[Triple], source: &str) -> StorageResult<usize>;

    /// All stored triples in insertion order
    fn load_triples(&self) -> StorageResult<Vec<Triple>>;

    /// Metadata of the stored snapshot, if one was saved
    fn snapshot_info(&self) -> StorageResult<Option<SnapshotInfo>>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: TripleSnapshot + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
