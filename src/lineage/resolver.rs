//! Transitive predecessor/successor search

use super::{Family, RelationIndex};
use crate::entity::{Entity, EntityId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Which side of the timeline a search walks towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Towards {
    Past,
    Future,
}

/// Read-only lineage queries against a relation index
#[derive(Debug, Clone, Copy)]
pub struct LineageResolver<'a> {
    index: &'a RelationIndex,
}

impl<'a> LineageResolver<'a> {
    pub fn new(index: &'a RelationIndex) -> Self {
        Self { index }
    }

    /// Every entity that `id` succeeded, directly or transitively
    ///
    /// Follows backward relations `id` declares and forward relations
    /// other entities declare about `id`.
    pub fn find_predecessors(&self, id: &EntityId) -> BTreeSet<EntityId> {
        self.walk(id, Towards::Past)
    }

    /// Every entity that superseded `id`, directly or transitively
    ///
    /// Mirror of [`find_predecessors`](Self::find_predecessors): backward
    /// relations pointing at `id` and forward relations `id` declares.
    pub fn find_successors(&self, id: &EntityId) -> BTreeSet<EntityId> {
        self.walk(id, Towards::Future)
    }

    /// Whether anything superseded `id`
    pub fn has_successor(&self, id: &EntityId) -> bool {
        self.neighbours(id, Towards::Future).next().is_some()
    }

    /// Deprecated or superseded
    pub fn is_excluded(&self, entity: &Entity) -> bool {
        entity.is_deprecated() || self.has_successor(&entity.id)
    }

    fn neighbours(&self, id: &EntityId, towards: Towards) -> Box<dyn Iterator<Item = &'a EntityId> + 'a> {
        let index = self.index;
        match towards {
            Towards::Past => Box::new(
                index
                    .outgoing(id, Family::Backward)
                    .chain(index.incoming(id, Family::Forward)),
            ),
            Towards::Future => Box::new(
                index
                    .incoming(id, Family::Backward)
                    .chain(index.outgoing(id, Family::Forward)),
            ),
        }
    }

    /// Worklist traversal; the visited set is seeded with the start so
    /// cycles back to it stop immediately and it never appears in the result.
    fn walk(&self, start: &EntityId, towards: Towards) -> BTreeSet<EntityId> {
        let mut visited: BTreeSet<&EntityId> = BTreeSet::new();
        visited.insert(start);
        let mut found: BTreeSet<EntityId> = BTreeSet::new();
        let mut stack: Vec<&EntityId> = vec![start];

        while let Some(current) = stack.pop() {
            for next in self.neighbours(current, towards) {
                if visited.insert(next) {
                    found.insert(next.clone());
                    stack.push(next);
                }
            }
        }

        found
    }
}

/// Set the exclusion flag on every entity; returns how many are excluded
pub fn annotate_exclusions(entities: &mut BTreeMap<EntityId, Entity>, index: &RelationIndex) -> usize {
    let resolver = LineageResolver::new(index);
    let mut excluded = 0;
    for entity in entities.values_mut() {
        entity.excluded = resolver.is_excluded(entity);
        if entity.excluded {
            excluded += 1;
        }
    }
    debug!(excluded, total = entities.len(), "annotated exclusions");
    excluded
}
