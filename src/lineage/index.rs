//! Adjacency index over lineage relations

use super::{Family, RelationKind};
use crate::entity::EntityId;
use crate::graph::{Term, TripleStore};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Outgoing and incoming lineage edges per entity
///
/// Built once per run from the triple store and shared read-only by the
/// resolver.
#[derive(Debug, Default, Clone)]
pub struct RelationIndex {
    outgoing: HashMap<EntityId, Vec<(RelationKind, EntityId)>>,
    incoming: HashMap<EntityId, Vec<(RelationKind, EntityId)>>,
    edge_count: usize,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(source, kind, target)` edges
    pub fn from_edges<I, S, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, RelationKind, T)>,
        S: Into<EntityId>,
        T: Into<EntityId>,
    {
        let mut index = Self::new();
        for (source, kind, target) in edges {
            index.add(source.into(), kind, target.into());
        }
        index
    }

    /// Index every lineage triple in the store
    ///
    /// Relations whose object is not an IRI cannot name an entity and are
    /// reported and skipped.
    pub fn from_store(store: &TripleStore) -> Self {
        let mut index = Self::new();
        for triple in store.triples() {
            let Some(kind) = RelationKind::from_predicate(&triple.predicate) else {
                continue;
            };
            match (&triple.subject, &triple.object) {
                (Term::Iri { value: source }, Term::Iri { value: target }) => {
                    index.add(EntityId::from(source.as_str()), kind, EntityId::from(target.as_str()));
                }
                (subject, object) => {
                    warn!(
                        subject = %subject,
                        relation = %kind,
                        value = %object,
                        "lineage relation does not link two entities; skipping"
                    );
                }
            }
        }
        debug!(edges = index.edge_count, "built lineage relation index");
        index
    }

    fn add(&mut self, source: EntityId, kind: RelationKind, target: EntityId) {
        self.outgoing
            .entry(source.clone())
            .or_default()
            .push((kind, target.clone()));
        self.incoming.entry(target).or_default().push((kind, source));
        self.edge_count += 1;
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges declared by `id`, restricted to one family
    pub fn outgoing(&self, id: &EntityId, family: Family) -> impl Iterator<Item = &EntityId> {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .filter(move |(kind, _)| kind.family() == family)
            .map(|(_, target)| target)
    }

    /// Edges other entities declare about `id`, restricted to one family
    pub fn incoming(&self, id: &EntityId, family: Family) -> impl Iterator<Item = &EntityId> {
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .filter(move |(kind, _)| kind.family() == family)
            .map(|(_, source)| source)
    }
}
