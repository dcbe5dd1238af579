//! CSV export profiles
//!
//! A `MetadataProjector` turns entities into `Record`s for a `Profile`;
//! the affiliation feed projects ROR records with curated overrides.
//! `write_csv` serializes records under a header, leaving absent columns
//! empty.

mod affiliation;
mod overrides;
mod profile;
mod project;
mod record;
mod writer;

pub use affiliation::{project_affiliation, resolve_names, AffiliationNames, AFFILIATION_COLUMNS, AFFILIATION_FILE_NAME};
pub use overrides::{NameOverride, OverrideTable};
pub use profile::{Profile, BILINGUAL_COLUMNS, PARTNER_COLUMNS};
pub use project::{MetadataProjector, EXCLUDED_MARKER};
pub use record::Record;
pub use writer::{write_csv, write_records};

use thiserror::Error;

/// Errors reading override tables or writing exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
