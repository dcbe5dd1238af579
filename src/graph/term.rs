//! RDF terms and triples as seen by the exporter

use serde::{Deserialize, Serialize};

/// An RDF term in subject or object position
///
/// Only the distinctions the exporter needs are kept: IRIs, blank nodes
/// (label resources in SKOS-XL dumps are usually blank) and literals with
/// an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Term {
    Iri { value: String },
    Blank { value: String },
    Literal {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Self::Iri { value: value.into() }
    }

    pub fn blank(value: impl Into<String>) -> Self {
        Self::Blank { value: value.into() }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            lang: None,
        }
    }

    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            lang: Some(lang.into()),
        }
    }

    /// Lexical value: the IRI, the blank node label, or the literal text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iri { value } | Self::Blank { value } | Self::Literal { value, .. } => value,
        }
    }

    /// Language tag of a literal
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Literal { lang, .. } => lang.as_deref(),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Short tag used by the snapshot store
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Iri { .. } => "iri",
            Self::Blank { .. } => "blank",
            Self::Literal { .. } => "literal",
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri { value } => write!(f, "<{}>", value),
            Self::Blank { value } => write!(f, "_:{}", value),
            Self::Literal { value, lang: Some(lang) } => write!(f, "\"{}\"@{}", value, lang),
            Self::Literal { value, lang: None } => write!(f, "\"{}\"", value),
        }
    }
}

/// A subject-predicate-object statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    /// Predicate IRI
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}
