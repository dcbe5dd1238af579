//! Triple store adapter over the registry graph

mod load;
mod store;
mod term;
pub mod vocab;

pub use load::{parse_rdf_xml, read_rdf_xml, LoadError};
pub use store::TripleStore;
pub use term::{Term, Triple};
