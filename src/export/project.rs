//! Flatten entities into export records

use super::profile::Profile;
use super::record::Record;
use crate::config::Jurisdiction;
use crate::crossref::IdentifierMap;
use crate::entity::{columns, Entity, Label};
use crate::lineage::RelationKind;

/// Value written to the `excluded` column of superseded or deprecated entities
pub const EXCLUDED_MARKER: &str = "excluded";

/// Projects entities into records for one jurisdiction
#[derive(Debug, Clone, Copy)]
pub struct MetadataProjector<'a> {
    jurisdiction: &'a Jurisdiction,
    identifiers: &'a IdentifierMap,
}

impl<'a> MetadataProjector<'a> {
    pub fn new(jurisdiction: &'a Jurisdiction, identifiers: &'a IdentifierMap) -> Self {
        Self {
            jurisdiction,
            identifiers,
        }
    }

    pub fn in_jurisdiction(&self, entity: &Entity) -> bool {
        entity.attributes.first(columns::COUNTRY) == Some(self.jurisdiction.country_uri.as_str())
    }

    /// Record for `entity` under `profile`, or `None` when the profile
    /// leaves the entity out
    pub fn project(&self, entity: &Entity, profile: Profile) -> Option<Record> {
        match profile {
            Profile::Full => Some(self.full(entity)),
            Profile::Regional => Some(self.regional(entity)),
            Profile::Partner => self.partner(entity),
            Profile::Bilingual => self.bilingual(entity),
        }
    }

    /// Every attribute joined, plus the derived columns
    pub fn full(&self, entity: &Entity) -> Record {
        let mut record = Record::new();
        for key in entity.attributes.keys() {
            if let Some(values) = entity.attributes.get(key) {
                record.set_joined(key, values);
            }
        }
        record.set(columns::DOI, entity.id.as_str());
        if entity.excluded {
            record.set(columns::EXCLUDED, EXCLUDED_MARKER);
        }
        record.set_joined(columns::PREVIOUS_LABEL, &entity.previous_labels);
        record
    }

    /// The full record, enriched when the entity is in the jurisdiction
    pub fn regional(&self, entity: &Entity) -> Record {
        let mut record = self.full(entity);
        if !self.in_jurisdiction(entity) {
            return record;
        }

        record.set(columns::COUNTRY, self.jurisdiction.country_name.as_str());
        if let Some(states) = entity.attributes.get(columns::STATE) {
            let named: Vec<&str> = states
                .iter()
                .map(|uri| self.jurisdiction.state_name(uri).unwrap_or(uri))
                .collect();
            record.set_joined(columns::STATE, &named);
        }

        if let Some(refs) = entity.id.registry_id().and_then(|id| self.identifiers.get(id)) {
            record.set_joined(columns::ROR_PREFERRED, &refs.preferred);
            record.set_joined(columns::ROR_SECONDARY, &refs.secondary);
        }

        if let Some(pref) = &entity.pref_label {
            let column = match pref.lang() {
                Some("en") => columns::PRIMARY_NAME_EN,
                Some("fr") => columns::PRIMARY_NAME_FR,
                _ => columns::PRIMARY_NAME_OTHER,
            };
            record.set(column, pref.value.as_str());
        }

        let mut non_display = Vec::new();
        let mut alt_en = Vec::new();
        let mut alt_fr = Vec::new();
        for label in &entity.alt_labels {
            let bucket = if label.acronym {
                &mut non_display
            } else {
                match label.lang() {
                    Some("en") => &mut alt_en,
                    Some("fr") => &mut alt_fr,
                    _ => &mut non_display,
                }
            };
            bucket.push(label.value.as_str());
        }
        record.set_joined(columns::NON_DISPLAY_NAMES, &non_display);
        record.set_joined(columns::ALT_NAMES_EN, &alt_en);
        record.set_joined(columns::ALT_NAMES_FR, &alt_fr);

        record
    }

    /// `id, primary_name, additional_names, created, modified`
    pub fn partner(&self, entity: &Entity) -> Option<Record> {
        if entity.excluded {
            return None;
        }
        let mut record = Record::new();
        record.set("id", entity.id.as_str());
        if let Some(pref) = &entity.pref_label {
            record.set("primary_name", pref.value.as_str());
        }
        let additional: Vec<&str> = entity
            .alt_labels
            .iter()
            .map(|label| label.value.as_str())
            .chain(entity.previous_labels.iter().map(String::as_str))
            .collect();
        record.set_joined("additional_names", &additional);
        if let Some(created) = entity.attributes.joined(columns::CREATED) {
            record.set("created", created);
        }
        if let Some(modified) = entity.attributes.joined(columns::MODIFIED) {
            record.set("modified", modified);
        }
        Some(record)
    }

    /// English/French name pairing for entities in the jurisdiction
    pub fn bilingual(&self, entity: &Entity) -> Option<Record> {
        if !self.in_jurisdiction(entity) {
            return None;
        }

        let mut record = Record::new();
        let mut verification = false;
        record.set("doi", entity.id.as_str());
        let pref_lang = entity.pref_label.as_ref().and_then(Label::lang);
        if let Some(lang) = pref_lang {
            record.set("prefLang", lang);
        }

        for lang in ["en", "fr"] {
            let (names, acronyms) = split_alternates(&entity.alt_labels, lang);
            let label_slot: Vec<&str> = match (&entity.pref_label, pref_lang) {
                (Some(pref), Some(pref_lang)) if pref_lang == lang => vec![pref.value.as_str()],
                _ => names,
            };
            verification |= label_slot.len() > 1 || acronyms.len() > 1;
            record.set_joined(format!("label_{}", lang), &label_slot);
            record.set_joined(format!("acronym_{}", lang), &acronyms);
        }
        record.set("verification", verification.to_string());

        if let Some(kind) = entity.attributes.joined(columns::FUNDING_BODY_TYPE) {
            record.set("fundingBodyType", kind);
        }
        if let Some(sub_kind) = entity.attributes.joined(columns::FUNDING_BODY_SUB_TYPE) {
            record.set("fundingBodySubType", sub_kind);
        }
        for kind in [
            RelationKind::RenamedAs,
            RelationKind::ContinuationOf,
            RelationKind::Replaces,
            RelationKind::IsReplacedBy,
        ] {
            let targets: Vec<&str> = entity
                .relations
                .iter()
                .filter(|relation| relation.kind == kind)
                .map(|relation| relation.target.as_str())
                .collect();
            record.set_joined(kind.to_string(), &targets);
        }
        if let Some(broader) = entity.attributes.get(columns::BROADER) {
            record.set_joined("broader", broader);
        }
        if let Some(narrower) = entity.attributes.get(columns::NARROWER) {
            record.set_joined("narrower", narrower);
        }

        Some(record)
    }
}

/// Non-acronym names and acronyms among the alternates in `lang`
fn split_alternates<'l>(labels: &'l [Label], lang: &str) -> (Vec<&'l str>, Vec<&'l str>) {
    let mut names = Vec::new();
    let mut acronyms = Vec::new();
    for label in labels.iter().filter(|label| label.lang() == Some(lang)) {
        if label.acronym || looks_like_acronym(&label.value) {
            acronyms.push(label.value.as_str());
        } else {
            names.push(label.value.as_str());
        }
    }
    (names, acronyms)
}

/// At least one cased character and no lowercase ones
fn looks_like_acronym(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && !value.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossref::{build_identifier_map, ExternalIds, OneOrMany, RorCountry, RorRecord, FUNDREF_KEY};
    use crate::lineage::Relation;

    const CANADA: &str = "http://sws.geonames.org/6251999/";
    const ONTARIO: &str = "http://sws.geonames.org/6093943/";
    const FUNDER: &str = "http://dx.doi.org/10.13039/501100000038";

    fn canadian_funder() -> Entity {
        Entity::new(FUNDER)
            .with_pref_label(Label::new("Natural Sciences and Engineering Research Council").with_lang("en"))
            .with_alt_label(Label::new("NSERC").with_lang("en").as_acronym())
            .with_alt_label(Label::new("Conseil de recherches en sciences naturelles").with_lang("fr"))
            .with_alt_label(Label::new("CRSNG").with_lang("fr"))
            .with_alt_label(Label::new("NSERC Canada").with_lang("de"))
            .with_attribute(columns::PREF_LABEL, "Natural Sciences and Engineering Research Council")
            .with_attribute(columns::COUNTRY, CANADA)
            .with_attribute(columns::STATE, ONTARIO)
            .with_attribute(columns::CREATED, "2009-05-01")
            .with_attribute(columns::FUNDING_BODY_TYPE, "gov")
    }

    fn identifiers() -> IdentifierMap {
        let mut record = RorRecord {
            id: "https://ror.org/01h531d29".to_string(),
            country: RorCountry {
                country_code: "CA".to_string(),
                country_name: "Canada".to_string(),
            },
            ..Default::default()
        };
        record.external_ids.insert(
            FUNDREF_KEY.to_string(),
            ExternalIds {
                preferred: None,
                all: OneOrMany::One("501100000038".to_string()),
            },
        );
        build_identifier_map(&[record], "CA")
    }

    #[test]
    fn full_record_joins_attributes() {
        let jurisdiction = Jurisdiction::default();
        let ids = IdentifierMap::new();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let mut entity = canadian_funder().with_attribute(columns::STATE, "http://example.org/elsewhere");
        entity.excluded = true;
        entity.previous_labels = vec!["Old".to_string(), "Older".to_string()];

        let record = projector.full(&entity);
        assert_eq!(record.get(columns::DOI), Some(FUNDER));
        assert_eq!(record.get(columns::EXCLUDED), Some(EXCLUDED_MARKER));
        assert_eq!(record.get(columns::PREVIOUS_LABEL), Some("Old||Older"));
        assert_eq!(
            record.get(columns::STATE),
            Some("http://sws.geonames.org/6093943/||http://example.org/elsewhere")
        );
        assert_eq!(record.get(columns::COUNTRY), Some(CANADA));
    }

    #[test]
    fn regional_enriches_jurisdiction_entities() {
        let jurisdiction = Jurisdiction::default();
        let ids = identifiers();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let record = projector.regional(&canadian_funder());
        assert_eq!(record.get(columns::COUNTRY), Some("Canada"));
        assert_eq!(record.get(columns::STATE), Some("Ontario"));
        assert_eq!(record.get(columns::ROR_PREFERRED), Some("https://ror.org/01h531d29"));
        assert_eq!(record.get(columns::ROR_SECONDARY), None);
        assert_eq!(
            record.get(columns::PRIMARY_NAME_EN),
            Some("Natural Sciences and Engineering Research Council")
        );
        assert_eq!(record.get(columns::NON_DISPLAY_NAMES), Some("NSERC||NSERC Canada"));
        assert_eq!(record.get(columns::ALT_NAMES_FR), Some("Conseil de recherches en sciences naturelles||CRSNG"));
        assert_eq!(record.get(columns::ALT_NAMES_EN), None);
    }

    #[test]
    fn regional_leaves_other_countries_untouched() {
        let jurisdiction = Jurisdiction::default();
        let ids = identifiers();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let entity = Entity::new("http://dx.doi.org/10.13039/100000001")
            .with_pref_label(Label::new("National Science Foundation").with_lang("en"))
            .with_attribute(columns::COUNTRY, "http://sws.geonames.org/6252001/");
        let record = projector.regional(&entity);
        assert_eq!(record.get(columns::COUNTRY), Some("http://sws.geonames.org/6252001/"));
        assert_eq!(record.get(columns::PRIMARY_NAME_EN), None);
    }

    #[test]
    fn partner_skips_excluded_and_appends_previous_labels() {
        let jurisdiction = Jurisdiction::default();
        let ids = IdentifierMap::new();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let mut entity = Entity::new("http://dx.doi.org/10.13039/1")
            .with_pref_label(Label::new("New Name"))
            .with_alt_label(Label::new("NN"))
            .with_attribute(columns::CREATED, "2020-01-01")
            .with_attribute(columns::MODIFIED, "2021-01-01");
        entity.previous_labels = vec!["Old Name".to_string()];

        let record = projector.partner(&entity).unwrap();
        assert_eq!(record.get("primary_name"), Some("New Name"));
        assert_eq!(record.get("additional_names"), Some("NN||Old Name"));
        assert_eq!(record.get("created"), Some("2020-01-01"));
        assert_eq!(record.get("modified"), Some("2021-01-01"));

        entity.excluded = true;
        assert!(projector.partner(&entity).is_none());
    }

    #[test]
    fn bilingual_pairs_languages() {
        let jurisdiction = Jurisdiction::default();
        let ids = IdentifierMap::new();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let entity = canadian_funder()
            .with_relation(Relation::new(RelationKind::ContinuationOf, "http://dx.doi.org/10.13039/9"));
        let record = projector.bilingual(&entity).unwrap();
        assert_eq!(record.get("prefLang"), Some("en"));
        assert_eq!(record.get("label_en"), Some("Natural Sciences and Engineering Research Council"));
        assert_eq!(record.get("acronym_en"), Some("NSERC"));
        assert_eq!(record.get("label_fr"), Some("Conseil de recherches en sciences naturelles"));
        assert_eq!(record.get("acronym_fr"), Some("CRSNG"));
        assert_eq!(record.get("verification"), Some("false"));
        assert_eq!(record.get("fundingBodyType"), Some("gov"));
        assert_eq!(record.get("continuationOf"), Some("http://dx.doi.org/10.13039/9"));
    }

    #[test]
    fn bilingual_flags_ambiguous_slots() {
        let jurisdiction = Jurisdiction::default();
        let ids = IdentifierMap::new();
        let projector = MetadataProjector::new(&jurisdiction, &ids);

        let entity = canadian_funder().with_alt_label(Label::new("Conseil de recherches").with_lang("fr"));
        let record = projector.bilingual(&entity).unwrap();
        assert_eq!(
            record.get("label_fr"),
            Some("Conseil de recherches en sciences naturelles||Conseil de recherches")
        );
        assert_eq!(record.get("verification"), Some("true"));
    }

    #[test]
    fn bilingual_skips_other_jurisdictions() {
        let jurisdiction = Jurisdiction::default();
        let ids = IdentifierMap::new();
        let projector = MetadataProjector::new(&jurisdiction, &ids);
        assert!(projector.bilingual(&Entity::new("http://dx.doi.org/10.13039/1")).is_none());
    }

    #[test]
    fn acronym_heuristic_needs_cased_uppercase() {
        assert!(looks_like_acronym("CIHR-IRSC"));
        assert!(!looks_like_acronym("Mitacs"));
        assert!(!looks_like_acronym("1234"));
    }
}
