//! Organizational lineage: relation kinds, traversal and label succession
//!
//! Registry records point at each other with ten succession predicates.
//! Five of them are declared by the newer record about an older one
//! (backward family), the other five by the older record about the newer
//! one (forward family). Both directions have to be read to know who came
//! before or after a record.

mod index;
mod propagate;
mod resolver;

pub use index::RelationIndex;
pub use propagate::{propagate_labels, pull_from_predecessors, push_to_successors};
pub use resolver::{annotate_exclusions, LineageResolver};

use crate::entity::EntityId;
use crate::graph::vocab::{DCTERMS, GRANT};
use serde::{Deserialize, Serialize};

/// Which way a relation points along the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Subject succeeded or absorbed the object
    Backward,
    /// Subject was absorbed into or replaced by the object
    Forward,
}

/// The ten succession predicates used by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    ContinuationOf,
    Incorporates,
    MergerOf,
    Replaces,
    SplitFrom,
    IncorporatedInto,
    IsReplacedBy,
    MergedWith,
    RenamedAs,
    SplitInto,
}

impl RelationKind {
    pub const ALL: [RelationKind; 10] = [
        Self::ContinuationOf,
        Self::Incorporates,
        Self::MergerOf,
        Self::Replaces,
        Self::SplitFrom,
        Self::IncorporatedInto,
        Self::IsReplacedBy,
        Self::MergedWith,
        Self::RenamedAs,
        Self::SplitInto,
    ];

    pub fn family(self) -> Family {
        match self {
            Self::ContinuationOf
            | Self::Incorporates
            | Self::MergerOf
            | Self::Replaces
            | Self::SplitFrom => Family::Backward,
            Self::IncorporatedInto
            | Self::IsReplacedBy
            | Self::MergedWith
            | Self::RenamedAs
            | Self::SplitInto => Family::Forward,
        }
    }

    /// Local name of the predicate
    fn local_name(self) -> &'static str {
        match self {
            Self::ContinuationOf => "continuationOf",
            Self::Incorporates => "incorporates",
            Self::MergerOf => "mergerOf",
            Self::Replaces => "replaces",
            Self::SplitFrom => "splitFrom",
            Self::IncorporatedInto => "incorporatedInto",
            Self::IsReplacedBy => "isReplacedBy",
            Self::MergedWith => "mergedWith",
            Self::RenamedAs => "renamedAs",
            Self::SplitInto => "splitInto",
        }
    }

    fn namespace(self) -> &'static str {
        match self {
            Self::Replaces | Self::IsReplacedBy => DCTERMS,
            _ => GRANT,
        }
    }

    /// Full predicate IRI
    pub fn predicate(self) -> String {
        format!("{}{}", self.namespace(), self.local_name())
    }

    pub fn from_predicate(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            iri.strip_prefix(kind.namespace())
                .map(|local| local == kind.local_name())
                .unwrap_or(false)
        })
    }

    /// The relation the other side would declare
    pub fn inverse(self) -> Self {
        match self {
            Self::ContinuationOf => Self::RenamedAs,
            Self::Incorporates => Self::IncorporatedInto,
            Self::MergerOf => Self::MergedWith,
            Self::Replaces => Self::IsReplacedBy,
            Self::SplitFrom => Self::SplitInto,
            Self::IncorporatedInto => Self::Incorporates,
            Self::IsReplacedBy => Self::Replaces,
            Self::MergedWith => Self::MergerOf,
            Self::RenamedAs => Self::ContinuationOf,
            Self::SplitInto => Self::SplitFrom,
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.local_name())
    }
}

/// A declared lineage edge from the owning entity to `target`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub target: EntityId,
}

impl Relation {
    pub fn new(kind: RelationKind, target: impl Into<EntityId>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// Transitive lineage of one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineageReport {
    pub id: EntityId,
    pub predecessors: Vec<EntityId>,
    pub successors: Vec<EntityId>,
    pub deprecated: bool,
    pub excluded: bool,
    pub previous_labels: Vec<String>,
}
