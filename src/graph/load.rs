//! RDF/XML ingestion into exporter triples

use super::term::{Term, Triple};
use oxrdfxml::RdfXmlParser;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading a registry dump
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("registry file {path} not found; download the registry RDF dump first")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RDF/XML syntax error: {0}")]
    Syntax(#[from] oxrdfxml::RdfXmlParseError),
}

fn convert_subject(subject: oxrdf::Subject) -> Option<Term> {
    match subject {
        oxrdf::Subject::NamedNode(n) => Some(Term::iri(n.into_string())),
        oxrdf::Subject::BlankNode(b) => Some(Term::blank(b.into_string())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn convert_object(object: oxrdf::Term) -> Option<Term> {
    match object {
        oxrdf::Term::NamedNode(n) => Some(Term::iri(n.into_string())),
        oxrdf::Term::BlankNode(b) => Some(Term::blank(b.into_string())),
        oxrdf::Term::Literal(l) => Some(match l.language() {
            Some(lang) => Term::lang_literal(l.value(), lang),
            None => Term::literal(l.value()),
        }),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Parse RDF/XML from any reader
///
/// Quoted triples (RDF-star) have no meaning in the registry and are
/// skipped.
pub fn parse_rdf_xml(reader: impl Read) -> Result<Vec<Triple>, LoadError> {
    let mut triples = Vec::new();
    let mut skipped = 0usize;

    for parsed in RdfXmlParser::new().for_reader(reader) {
        let parsed = parsed?;
        let subject = convert_subject(parsed.subject);
        let object = convert_object(parsed.object);
        match (subject, object) {
            (Some(subject), Some(object)) => {
                triples.push(Triple::new(subject, parsed.predicate.into_string(), object));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped quoted triples");
    }
    Ok(triples)
}

/// Read an RDF/XML file from disk
pub fn read_rdf_xml(path: impl AsRef<Path>) -> Result<Vec<Triple>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.display().to_string(),
        });
    }
    info!(path = %path.display(), "parsing registry RDF/XML");
    let file = File::open(path)?;
    let triples = parse_rdf_xml(BufReader::new(file))?;
    info!(count = triples.len(), "parsed registry triples");
    Ok(triples)
}
