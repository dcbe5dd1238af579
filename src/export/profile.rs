//! Funder export profiles and their headers

use crate::entity::columns::{self, PREDICATE_COLUMNS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Columns the regional profile inserts after the timestamps
const REGIONAL_NAME_COLUMNS: [&str; 6] = [
    columns::PRIMARY_NAME_EN,
    columns::PRIMARY_NAME_FR,
    columns::PRIMARY_NAME_OTHER,
    columns::NON_DISPLAY_NAMES,
    columns::ALT_NAMES_EN,
    columns::ALT_NAMES_FR,
];

const LEADING_COLUMNS: [&str; 10] = [
    columns::DOI,
    columns::EXCLUDED,
    columns::PREF_LABEL,
    columns::PREF_LABEL_LANG,
    columns::ALT_LABEL,
    columns::PREVIOUS_LABEL,
    columns::COUNTRY,
    columns::STATE,
    columns::CREATED,
    columns::MODIFIED,
];

pub const PARTNER_COLUMNS: [&str; 5] = ["id", "primary_name", "additional_names", "created", "modified"];

pub const BILINGUAL_COLUMNS: [&str; 15] = [
    "doi",
    "prefLang",
    "label_en",
    "acronym_en",
    "label_fr",
    "acronym_fr",
    "fundingBodyType",
    "fundingBodySubType",
    "verification",
    "renamedAs",
    "continuationOf",
    "replaces",
    "isReplacedBy",
    "broader",
    "narrower",
];

/// Shape of a funder export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Every attribute of every entity
    Full,
    /// Full export with jurisdiction enrichment and per-language names
    Regional,
    /// Compact feed for the data-repository partner; excluded entities skipped
    Partner,
    /// Reviewer sheet pairing English and French names
    Bilingual,
}

impl Profile {
    pub const ALL: [Profile; 4] = [Profile::Full, Profile::Regional, Profile::Partner, Profile::Bilingual];

    pub fn name(self) -> &'static str {
        match self {
            Profile::Full => "full",
            Profile::Regional => "regional",
            Profile::Partner => "partner",
            Profile::Bilingual => "bilingual",
        }
    }

    /// Default output file name
    pub fn file_name(self) -> String {
        match self {
            Profile::Full => "funder_metadata.csv".to_string(),
            other => format!("funder_metadata_{}.csv", other.name()),
        }
    }

    /// Column order for this profile; `extra_columns` are unknown predicate
    /// IRIs and only appear in the attribute-dump profiles
    pub fn header(self, extra_columns: &[String]) -> Vec<String> {
        match self {
            Profile::Full | Profile::Regional => {
                let regional = self == Profile::Regional;
                let mut header: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
                if regional {
                    header.extend(REGIONAL_NAME_COLUMNS.iter().map(|c| c.to_string()));
                }
                header.extend(
                    PREDICATE_COLUMNS
                        .iter()
                        .map(|(_, column)| *column)
                        .filter(|column| !LEADING_COLUMNS.contains(column))
                        .map(str::to_string),
                );
                if regional {
                    header.push(columns::ROR_PREFERRED.to_string());
                    header.push(columns::ROR_SECONDARY.to_string());
                }
                for extra in extra_columns {
                    if !header.contains(extra) {
                        header.push(extra.clone());
                    }
                }
                header
            }
            Profile::Partner => PARTNER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            Profile::Bilingual => BILINGUAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Profile::Full),
            "regional" | "canada" => Ok(Profile::Regional),
            "partner" | "frdr" => Ok(Profile::Partner),
            "bilingual" => Ok(Profile::Bilingual),
            other => Err(format!(
                "unknown export profile '{}' (expected one of: full, regional, partner, bilingual)",
                other
            )),
        }
    }
}
