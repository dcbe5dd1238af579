//! Top-level error type

use crate::config::ConfigError;
use crate::crossref::CrossrefError;
use crate::export::ExportError;
use crate::graph::LoadError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can abort a fundex run
#[derive(Debug, Error)]
pub enum FundexError {
    #[error("registry snapshot {path} not found; run `fundex load` first")]
    SnapshotMissing { path: String },

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Crossref(#[from] CrossrefError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type for fundex operations
pub type FundexResult<T> = Result<T, FundexError>;
