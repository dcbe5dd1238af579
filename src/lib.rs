//! Fundex: funder and affiliation registry exporter
//!
//! Turns the Funder Registry RDF dump and a ROR JSON dump into flat CSV
//! exports. The interesting part is lineage: registry records point at
//! each other with merger, split, rename and replacement relations, and
//! every record inherits the names of the records it succeeded.
//!
//! # Pipeline
//!
//! - **graph**: RDF/XML parsing and an indexed in-memory triple store
//! - **storage**: SQLite snapshot of the parsed triples
//! - **entity**: per-record attributes and labels
//! - **lineage**: relation index, predecessor/successor search, exclusion
//!   and previous-label propagation
//! - **crossref**: Funder Registry id → ROR id mapping
//! - **export**: export profiles, override merging and CSV output
//!
//! # Example
//!
//! ```
//! use fundex::{EntityId, Registry};
//!
//! let registry = Registry::from_triples(Vec::new());
//! assert!(registry.get(&EntityId::from("http://dx.doi.org/10.13039/1")).is_none());
//! ```

pub mod config;
pub mod crossref;
pub mod entity;
mod error;
pub mod export;
pub mod graph;
pub mod lineage;
pub mod pipeline;
mod registry;
pub mod storage;

pub use config::{ConfigError, Jurisdiction, PipelineConfig};
pub use entity::{Entity, EntityId, Label};
pub use error::{FundexError, FundexResult};
pub use export::{ExportError, MetadataProjector, Profile, Record};
pub use graph::{Term, Triple, TripleStore};
pub use lineage::{LineageReport, LineageResolver, Relation, RelationIndex, RelationKind};
pub use registry::Registry;
pub use storage::{OpenStore, SqliteStore, StorageError, StorageResult, TripleSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
