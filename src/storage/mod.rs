//! Persisted registry snapshots
//!
//! Parsing the full RDF/XML dump is slow, so the `load` step stores the
//! parsed triples once and every export reads them back through the
//! `TripleSnapshot` trait. The implementation is `SqliteStore`.

mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{OpenStore, SnapshotInfo, StorageError, StorageResult, TripleSnapshot};
