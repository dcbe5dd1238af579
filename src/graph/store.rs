//! In-memory triple store with subject and object indexes

use super::term::{Term, Triple};
use std::collections::HashMap;

/// Read-only triple store built once per run
///
/// Triples are kept in load order; subject and object indexes point back
/// into that vector so lookups return results in encounter order.
#[derive(Debug, Default, Clone)]
pub struct TripleStore {
    triples: Vec<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_object: HashMap<Term, Vec<usize>>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from triples, dropping exact duplicates
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut store = Self::new();
        for triple in triples {
            store.insert(triple);
        }
        store
    }

    /// Add a triple; returns false if the identical triple is already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        let duplicate = self
            .by_subject
            .get(&triple.subject)
            .map(|idxs| idxs.iter().any(|&i| self.triples[i] == triple))
            .unwrap_or(false);
        if duplicate {
            return false;
        }

        let idx = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(idx);
        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .push(idx);
        self.triples.push(triple);
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    fn with_subject<'a>(&'a self, subject: &Term) -> impl Iterator<Item = &'a Triple> + 'a {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i])
    }

    fn with_object<'a>(&'a self, object: &Term) -> impl Iterator<Item = &'a Triple> + 'a {
        self.by_object
            .get(object)
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i])
    }

    /// Objects of `predicate` for `subject`
    pub fn objects<'a>(&'a self, subject: &Term, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.with_subject(subject)
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects that have `object` under `predicate`
    pub fn subjects<'a>(&'a self, predicate: &'a str, object: &Term) -> impl Iterator<Item = &'a Term> + 'a {
        self.with_object(object)
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.subject)
    }

    /// Every (predicate, object) pair for `subject`
    pub fn predicate_objects<'a>(&'a self, subject: &Term) -> impl Iterator<Item = (&'a str, &'a Term)> + 'a {
        self.with_subject(subject)
            .map(|t| (t.predicate.as_str(), &t.object))
    }

    /// Every (subject, predicate) pair pointing at `object`
    pub fn subject_predicates<'a>(&'a self, object: &Term) -> impl Iterator<Item = (&'a Term, &'a str)> + 'a {
        self.with_object(object)
            .map(|t| (&t.subject, t.predicate.as_str()))
    }

    /// First object of `predicate` for `subject`
    pub fn value(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.with_subject(subject)
            .find(|t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects typed with the given class IRI, in load order
    pub fn instances_of(&self, class_iri: &str) -> Vec<&Term> {
        let class = Term::iri(class_iri);
        self.subjects(super::vocab::RDF_TYPE, &class).collect()
    }
}
