//! The annotated entity registry
//!
//! Building a `Registry` runs the whole derivation once: entities are
//! collected from the triple store, the relation index is built, exclusion
//! flags are set and previous labels are propagated.

use crate::entity::{collect_entities, Entity, EntityId};
use crate::graph::{Triple, TripleStore};
use crate::lineage::{annotate_exclusions, propagate_labels, LineageReport, LineageResolver, RelationIndex};
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default)]
pub struct Registry {
    entities: BTreeMap<EntityId, Entity>,
    /// Unknown predicate IRIs in encounter order
    extra_columns: Vec<String>,
    index: RelationIndex,
}

impl Registry {
    pub fn build(store: &TripleStore) -> Self {
        let collection = collect_entities(store);
        let mut entities = collection.entities;
        let index = RelationIndex::from_store(store);

        let excluded = annotate_exclusions(&mut entities, &index);
        let added = propagate_labels(&mut entities);
        info!(
            entities = entities.len(),
            relations = index.edge_count(),
            excluded,
            previous_labels = added,
            "registry annotated"
        );

        Self {
            entities,
            extra_columns: collection.extra_columns,
            index,
        }
    }

    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        Self::build(&TripleStore::from_triples(triples))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Entities in identifier order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn resolver(&self) -> LineageResolver<'_> {
        LineageResolver::new(&self.index)
    }

    /// Lineage summary of one entity
    pub fn lineage(&self, id: &EntityId) -> Option<LineageReport> {
        let entity = self.entities.get(id)?;
        let resolver = self.resolver();
        Some(LineageReport {
            id: id.clone(),
            predecessors: resolver.find_predecessors(id).into_iter().collect(),
            successors: resolver.find_successors(id).into_iter().collect(),
            deprecated: entity.is_deprecated(),
            excluded: entity.excluded,
            previous_labels: entity.previous_labels.clone(),
        })
    }
}
