//! Flatten registry triples into per-entity records

use super::attributes::Attributes;
use super::columns::{self, column_for_predicate, known_column};
use super::model::{Entity, EntityId, Label};
use crate::graph::{vocab, Term, TripleStore};
use crate::lineage::{Relation, RelationKind};
use std::collections::BTreeMap;
use tracing::{info, warn};

const PROGRESS_EVERY: usize = 5000;

/// Entities collected from a store, plus columns for predicates the
/// exporter does not know by name
#[derive(Debug, Default, Clone)]
pub struct Collection {
    pub entities: BTreeMap<EntityId, Entity>,
    /// Unknown predicate IRIs in encounter order
    pub extra_columns: Vec<String>,
}

/// Resolve a SKOS-XL label resource to its literal form
fn label_literal<'a>(store: &'a TripleStore, resource: &'a Term) -> Option<&'a Term> {
    if resource.is_literal() {
        // Plain SKOS labels attached directly
        return Some(resource);
    }
    store.value(resource, vocab::SKOSXL_LITERAL_FORM)
}

fn is_acronym_flag(store: &TripleStore, resource: &Term) -> bool {
    store
        .value(resource, vocab::TERMS_USAGE_FLAG)
        .map(|flag| flag.as_str().contains("acronym"))
        .unwrap_or(false)
}

/// Build one entity from the triples describing `subject`
pub fn collect_entity(store: &TripleStore, subject: &Term, extra_columns: &mut Vec<String>) -> Entity {
    let id = EntityId::from(subject.as_str());
    let mut attributes = Attributes::new();
    let mut pref_label: Option<Label> = None;
    let mut alt_labels = Vec::new();
    let mut relations = Vec::new();

    for (predicate, object) in store.predicate_objects(subject) {
        if known_column(predicate).is_none() && !extra_columns.iter().any(|c| c == predicate) {
            extra_columns.push(predicate.to_string());
        }
        let column = column_for_predicate(predicate);

        match predicate {
            vocab::SKOSXL_PREF_LABEL | vocab::SKOSXL_ALT_LABEL => {
                let Some(literal) = label_literal(store, object) else {
                    warn!(entity = %id, key = %column, value = %object, "label has no literal form; skipping");
                    continue;
                };
                let mut label = Label::new(literal.as_str());
                if let Some(lang) = literal.language() {
                    label = label.with_lang(lang);
                }

                if predicate == vocab::SKOSXL_PREF_LABEL {
                    match literal.language() {
                        Some(lang) => attributes.set(columns::PREF_LABEL_LANG, lang),
                        None => {
                            attributes.remove(columns::PREF_LABEL_LANG);
                        }
                    }
                    if pref_label.is_some() {
                        warn!(entity = %id, key = %column, value = %literal, "more than one preferred label");
                        alt_labels.push(label.clone());
                    } else {
                        pref_label = Some(label.clone());
                    }
                } else {
                    if is_acronym_flag(store, object) {
                        label = label.as_acronym();
                    }
                    alt_labels.push(label.clone());
                }
                attributes.push(column, label.value);
            }
            _ => {
                if let Some(kind) = RelationKind::from_predicate(predicate) {
                    match object {
                        Term::Iri { value } => relations.push(Relation::new(kind, value.as_str())),
                        other => {
                            warn!(entity = %id, key = %column, value = %other, "lineage relation without entity IRI; skipping");
                            continue;
                        }
                    }
                }
                attributes.push(column, object.as_str());
            }
        }
    }

    Entity {
        id,
        attributes,
        pref_label,
        alt_labels,
        relations,
        previous_labels: Vec::new(),
        excluded: false,
    }
}

/// Collect every SKOS concept in the store
pub fn collect_entities(store: &TripleStore) -> Collection {
    let subjects = store.instances_of(vocab::SKOS_CONCEPT);
    let total = subjects.len();
    info!(total, "processing registry entities");

    let mut collection = Collection::default();
    for subject in subjects {
        if !matches!(subject, Term::Iri { .. }) {
            warn!(subject = %subject, "concept without IRI; skipping");
            continue;
        }
        let count = collection.entities.len();
        if count > 0 && count % PROGRESS_EVERY == 0 {
            info!(processed = count, total, "processing registry entities");
        }
        let entity = collect_entity(store, subject, &mut collection.extra_columns);
        collection.entities.insert(entity.id.clone(), entity);
    }

    info!(processed = collection.entities.len(), total, "collected registry entities");
    collection
}
