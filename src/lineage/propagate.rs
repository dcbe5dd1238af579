//! Two-pass previous-label propagation
//!
//! Pass 1 pulls labels from the entities a record declares it succeeded.
//! Pass 2 pushes a record's labels onto the entities it declares it was
//! absorbed into. Both passes read current labels only and merge into
//! `previous_labels`, so running them again adds nothing.

use super::Family;
use crate::entity::{Entity, EntityId};
use std::collections::BTreeMap;
use tracing::{debug, info};

type EntityMap = BTreeMap<EntityId, Entity>;

fn apply(entities: &mut EntityMap, updates: Vec<(EntityId, Vec<String>)>) -> usize {
    let mut added = 0;
    for (id, labels) in updates {
        if let Some(entity) = entities.get_mut(&id) {
            added += entity.merge_previous_labels(labels.iter().map(String::as_str));
        }
    }
    added
}

fn push_unique(into: &mut Vec<String>, label: &str) {
    if !into.iter().any(|l| l == label) {
        into.push(label.to_string());
    }
}

/// Pass 1: each entity collects the current labels of the targets of its
/// backward relations. Returns the number of labels added.
pub fn pull_from_predecessors(entities: &mut EntityMap) -> usize {
    let mut updates = Vec::new();

    for entity in entities.values() {
        let mut candidates: Vec<String> = Vec::new();
        for relation in entity
            .relations
            .iter()
            .filter(|r| r.kind.family() == Family::Backward)
        {
            let Some(target) = entities.get(&relation.target) else {
                debug!(entity = %entity.id, target = %relation.target, "predecessor not in registry");
                continue;
            };
            for label in target.current_labels() {
                push_unique(&mut candidates, label);
            }
        }
        if !candidates.is_empty() {
            updates.push((entity.id.clone(), candidates));
        }
    }

    apply(entities, updates)
}

/// Pass 2: each entity hands its current labels, minus the target's own,
/// to the targets of its forward relations. Returns the number of labels
/// added.
pub fn push_to_successors(entities: &mut EntityMap) -> usize {
    let mut updates = Vec::new();

    for entity in entities.values() {
        let own = entity.current_labels();
        for relation in entity
            .relations
            .iter()
            .filter(|r| r.kind.family() == Family::Forward)
        {
            let Some(target) = entities.get(&relation.target) else {
                debug!(entity = %entity.id, target = %relation.target, "successor not in registry");
                continue;
            };
            let target_labels = target.current_labels();
            let labels: Vec<String> = own
                .iter()
                .filter(|label| !target_labels.contains(*label))
                .map(|label| label.to_string())
                .collect();
            if !labels.is_empty() {
                updates.push((relation.target.clone(), labels));
            }
        }
    }

    apply(entities, updates)
}

/// Run both passes in order; returns the total number of labels added
pub fn propagate_labels(entities: &mut EntityMap) -> usize {
    info!("adding previous labels from related entities");
    let pulled = pull_from_predecessors(entities);
    let pushed = push_to_successors(entities);
    let annotated = entities
        .values()
        .filter(|e| !e.previous_labels.is_empty())
        .count();
    info!(pulled, pushed, annotated, "previous labels propagated");
    pulled + pushed
}
