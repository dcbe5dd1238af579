//! Registry entity representation

use super::attributes::Attributes;
use crate::graph::vocab;
use crate::lineage::Relation;
use serde::{Deserialize, Serialize};

/// Stable identifier of a registry entity (its URI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accept either a full entity URI or a bare Funder Registry id
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.contains("://") {
            Self(input.to_string())
        } else {
            Self(format!("{}{}", vocab::FUNDER_DOI_PREFIX, input))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Funder Registry id: the URI with the DOI prefix stripped
    ///
    /// Returns `None` for URIs outside the Funder Registry namespace.
    pub fn registry_id(&self) -> Option<&str> {
        self.0.strip_prefix(vocab::FUNDER_DOI_PREFIX)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A preferred or alternate name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Flagged as an acronym by the registry's usage flag
    #[serde(default)]
    pub acronym: bool,
}

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: None,
            acronym: false,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn as_acronym(mut self) -> Self {
        self.acronym = true;
        self
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

/// A funder or affiliation organization record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Raw predicate-derived columns
    pub attributes: Attributes,
    pub pref_label: Option<Label>,
    pub alt_labels: Vec<Label>,
    /// Lineage relations this entity declares, in encounter order
    pub relations: Vec<Relation>,
    /// Labels inherited from related entities; never overlaps current labels
    #[serde(default)]
    pub previous_labels: Vec<String>,
    /// Deprecated or superseded
    #[serde(default)]
    pub excluded: bool,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_pref_label(mut self, label: Label) -> Self {
        self.pref_label = Some(label);
        self
    }

    pub fn with_alt_label(mut self, label: Label) -> Self {
        self.alt_labels.push(label);
        self
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(key, value);
        self
    }

    /// Preferred label followed by all alternate labels
    pub fn current_labels(&self) -> Vec<&str> {
        self.pref_label
            .iter()
            .chain(self.alt_labels.iter())
            .map(|l| l.value.as_str())
            .collect()
    }

    /// Whether the registry marks this record as deprecated
    pub fn is_deprecated(&self) -> bool {
        self.attributes
            .get(super::columns::TERMS_STATUS)
            .map(|values| values.iter().any(|v| v.contains("Deprecated")))
            .unwrap_or(false)
    }

    /// Merge labels into `previous_labels`, skipping current labels and
    /// values already recorded. Returns how many were added.
    pub fn merge_previous_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) -> usize {
        let current: Vec<String> = self.current_labels().into_iter().map(str::to_string).collect();
        let mut added = 0;
        for label in labels {
            if current.iter().any(|c| c == label) {
                continue;
            }
            if self.previous_labels.iter().any(|p| p == label) {
                continue;
            }
            self.previous_labels.push(label.to_string());
            added += 1;
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::columns;

    #[test]
    fn registry_id_strips_doi_prefix() {
        let id = EntityId::from("http://dx.doi.org/10.13039/501100000038");
        assert_eq!(id.registry_id(), Some("501100000038"));
        assert_eq!(EntityId::from("https://ror.org/01abcde").registry_id(), None);
    }

    #[test]
    fn parse_accepts_bare_registry_ids() {
        assert_eq!(
            EntityId::parse("501100000038").as_str(),
            "http://dx.doi.org/10.13039/501100000038"
        );
        assert_eq!(EntityId::parse(" http://example.org/x ").as_str(), "http://example.org/x");
    }

    #[test]
    fn current_labels_lists_preferred_first() {
        let entity = Entity::new("e1")
            .with_pref_label(Label::new("Canada Council for the Arts").with_lang("en"))
            .with_alt_label(Label::new("CCA").with_lang("en").as_acronym())
            .with_alt_label(Label::new("Conseil des arts du Canada").with_lang("fr"));
        assert_eq!(
            entity.current_labels(),
            vec!["Canada Council for the Arts", "CCA", "Conseil des arts du Canada"]
        );
    }

    #[test]
    fn deprecated_status_is_detected_by_substring() {
        let entity = Entity::new("e1").with_attribute(columns::TERMS_STATUS, "Deprecated");
        assert!(entity.is_deprecated());
        assert!(!Entity::new("e2").is_deprecated());
    }

    #[test]
    fn merge_previous_labels_skips_current_and_duplicates() {
        let mut entity = Entity::new("e1").with_pref_label(Label::new("Bar"));
        let added = entity.merge_previous_labels(["Foo", "Bar", "Foo", "foo"]);
        assert_eq!(added, 2);
        assert_eq!(entity.previous_labels, vec!["Foo", "foo"]);
    }
}
