//! Cross-registry identifiers between the Funder Registry and ROR

mod mapper;
mod ror;

pub use mapper::{build_identifier_map, load_identifier_map, CrossRefs, IdentifierMap};
pub use ror::{load_ror_dump, CrossrefError, ExternalIds, OneOrMany, RorCountry, RorLabel, RorRecord};

/// Key of Funder Registry ids inside a ROR record's `external_ids`
pub const FUNDREF_KEY: &str = "FundRef";
