//! ROR data dump records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors reading a ROR dump
#[derive(Debug, Error)]
pub enum CrossrefError {
    #[error("ROR data file {path} not found")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not process ROR data as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One value or a list of values; the dump uses both shapes for `all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifiers a record holds in another registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub preferred: Option<String>,
    #[serde(default)]
    pub all: OneOrMany,
}

impl ExternalIds {
    /// The explicitly asserted preferred id, ignoring null or empty values
    pub fn asserted_preferred(&self) -> Option<&str> {
        self.preferred.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RorLabel {
    pub label: String,
    #[serde(default)]
    pub iso639: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RorCountry {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
}

/// An affiliation record from the ROR dump
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub acronyms: Vec<String>,
    #[serde(default)]
    pub labels: Vec<RorLabel>,
    #[serde(default)]
    pub country: RorCountry,
    /// Keyed by registry name, e.g. `FundRef`, `GRID`, `Wikidata`
    #[serde(default)]
    pub external_ids: HashMap<String, ExternalIds>,
}

impl RorRecord {
    pub fn funder_ids(&self) -> Option<&ExternalIds> {
        self.external_ids.get(super::FUNDREF_KEY)
    }
}

/// Read a ROR JSON dump (a top-level array of records)
pub fn load_ror_dump(path: impl AsRef<Path>) -> Result<Vec<RorRecord>, CrossrefError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CrossrefError::NotFound {
            path: path.display().to_string(),
        });
    }
    info!(path = %path.display(), "reading ROR data");
    let file = File::open(path)?;
    let records: Vec<RorRecord> = serde_json::from_reader(BufReader::new(file))?;
    info!(count = records.len(), "read ROR records");
    Ok(records)
}
