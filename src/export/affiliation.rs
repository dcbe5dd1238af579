//! Affiliation partner feed built from a ROR dump

use super::overrides::OverrideTable;
use super::record::Record;
use crate::crossref::RorRecord;

pub const AFFILIATION_COLUMNS: [&str; 5] = ["id", "country_code", "name_en", "name_fr", "altnames"];

pub const AFFILIATION_FILE_NAME: &str = "affiliation_metadata_frdr.csv";

/// Resolved names of one affiliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationNames {
    pub name_en: String,
    pub name_fr: String,
    pub altnames: Vec<String>,
}

/// Apply overrides to a record's names
///
/// Override names replace the record name; a single supplied name fills
/// both languages. The replaced name survives as an alternate when it
/// matches neither primary name. Alternates end up unique, in first-seen
/// order, and never equal to either primary name.
pub fn resolve_names(record: &RorRecord, overrides: &OverrideTable) -> AffiliationNames {
    let mut name_en = record.name.clone();
    let mut name_fr = record.name.clone();
    let mut candidates: Vec<&str> = record
        .aliases
        .iter()
        .chain(record.acronyms.iter())
        .map(String::as_str)
        .chain(record.labels.iter().map(|label| label.label.as_str()))
        .collect();

    if let Some(row) = overrides.get(&record.id) {
        if row.has_names() {
            name_en = row.name_en.clone();
            name_fr = row.name_fr.clone();
            if name_en.is_empty() {
                name_en = name_fr.clone();
            } else if name_fr.is_empty() {
                name_fr = name_en.clone();
            }
            if record.name != name_en && record.name != name_fr {
                candidates.push(record.name.as_str());
            }
        }
        candidates.extend(row.extra_altnames());
    }

    let mut altnames: Vec<String> = Vec::with_capacity(candidates.len());
    for name in candidates {
        if name == name_en || name == name_fr || altnames.iter().any(|seen| seen == name) {
            continue;
        }
        altnames.push(name.to_string());
    }

    AffiliationNames {
        name_en,
        name_fr,
        altnames,
    }
}

/// One feed row for `record`
pub fn project_affiliation(record: &RorRecord, overrides: &OverrideTable) -> Record {
    let names = resolve_names(record, overrides);
    let mut row = Record::new();
    row.set("id", record.id.as_str());
    row.set("country_code", record.country.country_code.as_str());
    row.set("name_en", names.name_en);
    row.set("name_fr", names.name_fr);
    row.set_joined("altnames", &names.altnames);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossref::RorLabel;
    use crate::export::NameOverride;

    fn affiliation() -> RorRecord {
        RorRecord {
            id: "https://ror.org/03dbr7087".to_string(),
            name: "University of Toronto".to_string(),
            aliases: vec!["U of T".to_string()],
            acronyms: vec!["UofT".to_string()],
            labels: vec![RorLabel {
                label: "Université de Toronto".to_string(),
                iso639: Some("fr".to_string()),
            }],
            ..Default::default()
        }
    }

    fn table(name_en: &str, name_fr: &str, altnames: &str) -> OverrideTable {
        let mut table = OverrideTable::new();
        table.insert(NameOverride {
            id: "https://ror.org/03dbr7087".to_string(),
            name_en: name_en.to_string(),
            name_fr: name_fr.to_string(),
            altnames: altnames.to_string(),
        });
        table
    }

    #[test]
    fn without_override_name_fills_both_languages() {
        let names = resolve_names(&affiliation(), &OverrideTable::new());
        assert_eq!(names.name_en, "University of Toronto");
        assert_eq!(names.name_fr, "University of Toronto");
        assert_eq!(names.altnames, vec!["U of T", "UofT", "Université de Toronto"]);
    }

    #[test]
    fn single_override_name_falls_back_and_keeps_original() {
        let names = resolve_names(&affiliation(), &table("Name A", "", ""));
        assert_eq!(names.name_en, "Name A");
        assert_eq!(names.name_fr, "Name A");
        assert!(names.altnames.contains(&"University of Toronto".to_string()));
    }

    #[test]
    fn override_names_are_removed_from_alternates() {
        let names = resolve_names(
            &affiliation(),
            &table("University of Toronto", "Université de Toronto", "UofT||Toronto U"),
        );
        assert_eq!(names.name_fr, "Université de Toronto");
        assert_eq!(names.altnames, vec!["U of T", "UofT", "Toronto U"]);
    }

    #[test]
    fn empty_override_names_keep_original_but_add_altnames() {
        let names = resolve_names(&affiliation(), &table("", "", "Toronto U"));
        assert_eq!(names.name_en, "University of Toronto");
        assert_eq!(names.altnames.last().map(String::as_str), Some("Toronto U"));
    }

    #[test]
    fn row_carries_country_code() {
        let mut record = affiliation();
        record.country.country_code = "CA".to_string();
        let row = project_affiliation(&record, &OverrideTable::new());
        assert_eq!(row.get("country_code"), Some("CA"));
        assert_eq!(row.get("altnames"), Some("U of T||UofT||Université de Toronto"));
    }
}
