//! Funder Registry id → ROR id lookup

use super::ror::{load_ror_dump, CrossrefError, RorRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// ROR ids linked to one Funder Registry id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossRefs {
    pub preferred: Vec<String>,
    pub secondary: Vec<String>,
}

/// Cross-registry identifier map keyed by Funder Registry id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentifierMap(BTreeMap<String, CrossRefs>);

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source_id: &str) -> Option<&CrossRefs> {
        self.0.get(source_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add_preferred(&mut self, source_id: &str, target: &str) {
        self.0
            .entry(source_id.to_string())
            .or_default()
            .preferred
            .push(target.to_string());
    }

    fn add_secondary(&mut self, source_id: &str, target: &str) {
        self.0
            .entry(source_id.to_string())
            .or_default()
            .secondary
            .push(target.to_string());
    }
}

/// Build the lookup from ROR records in one jurisdiction
///
/// A record's preferred funder id is its asserted `preferred` value; when
/// none is asserted and `all` lists exactly one id, that id counts as
/// preferred. Remaining ids in `all` are secondary.
pub fn build_identifier_map<'a>(
    records: impl IntoIterator<Item = &'a RorRecord>,
    country_code: &str,
) -> IdentifierMap {
    let mut map = IdentifierMap::new();

    for record in records {
        if record.country.country_code != country_code {
            continue;
        }
        let Some(funder_ids) = record.funder_ids() else {
            continue;
        };

        let mut all = funder_ids.all.clone().into_vec();
        let preferred = match funder_ids.asserted_preferred() {
            Some(p) => Some(p.to_string()),
            None if all.len() == 1 => {
                debug!(record = %record.id, funder_id = %all[0], "treating lone funder id as preferred");
                Some(all[0].clone())
            }
            None => None,
        };

        if let Some(preferred) = &preferred {
            all.retain(|id| id != preferred);
            map.add_preferred(preferred, &record.id);
        }
        for secondary in &all {
            map.add_secondary(secondary, &record.id);
        }
    }

    map
}

/// Load the ROR dump and build the lookup; a missing dump yields an
/// empty map
pub fn load_identifier_map(path: impl AsRef<Path>, country_code: &str) -> Result<IdentifierMap, CrossrefError> {
    let records = match load_ror_dump(path) {
        Ok(records) => records,
        Err(CrossrefError::NotFound { path }) => {
            warn!(%path, "ROR data not found; skipping ROR id enrichment");
            return Ok(IdentifierMap::new());
        }
        Err(e) => return Err(e),
    };
    let map = build_identifier_map(&records, country_code);
    info!(funder_ids = map.len(), country_code, "prepared funder to ROR mapping");
    Ok(map)
}
