//! Curated name overrides for the affiliation feed

use super::ExportError;
use crate::entity::SEPARATOR;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// One row of the tab-separated override table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameOverride {
    pub id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_fr: String,
    /// `||`-delimited extra alternate names
    #[serde(default)]
    pub altnames: String,
}

impl NameOverride {
    pub fn has_names(&self) -> bool {
        !self.name_en.is_empty() || !self.name_fr.is_empty()
    }

    pub fn extra_altnames(&self) -> impl Iterator<Item = &str> {
        self.altnames.split(SEPARATOR).filter(|name| !name.is_empty())
    }
}

/// Overrides keyed by affiliation id
#[derive(Debug, Clone, Default)]
pub struct OverrideTable(HashMap<String, NameOverride>);

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ExportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);

        let mut table = HashMap::new();
        for row in csv_reader.deserialize() {
            let row: NameOverride = row?;
            table.insert(row.id.clone(), row);
        }
        Ok(Self(table))
    }

    /// Read the table from disk; a missing file yields an empty table
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "override table not found; continuing without overrides");
            return Ok(Self::new());
        }
        let table = Self::from_reader(File::open(path)?)?;
        info!(overrides = table.len(), path = %path.display(), "loaded name overrides");
        Ok(table)
    }

    pub fn insert(&mut self, row: NameOverride) {
        self.0.insert(row.id.clone(), row);
    }

    pub fn get(&self, id: &str) -> Option<&NameOverride> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
