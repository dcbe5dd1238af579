//! Registry entities and their flattened attributes

mod attributes;
mod collect;
pub mod columns;
mod model;

pub use attributes::{Attributes, SEPARATOR};
pub use collect::{collect_entities, collect_entity, Collection};
pub use model::{Entity, EntityId, Label};
