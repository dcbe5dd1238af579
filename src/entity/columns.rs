//! Column names for registry predicates and derived fields

use crate::graph::vocab;

pub const DOI: &str = "doi";
pub const EXCLUDED: &str = "excluded";
pub const PREF_LABEL: &str = "skos-xl_prefLabel";
pub const PREF_LABEL_LANG: &str = "prefLabel_lang";
pub const ALT_LABEL: &str = "skos-xl_altLabel";
pub const PREVIOUS_LABEL: &str = "previousLabel";
pub const COUNTRY: &str = "crossref_country";
pub const STATE: &str = "crossref_state";
pub const CREATED: &str = "dcterms_created";
pub const MODIFIED: &str = "dcterms_modified";
pub const FUNDING_BODY_TYPE: &str = "crossref_fundingBodyType";
pub const FUNDING_BODY_SUB_TYPE: &str = "crossref_fundingBodySubType";
pub const TERMS_STATUS: &str = "crossref_termsstatus";
pub const BROADER: &str = "skos-core_broader";
pub const NARROWER: &str = "skos-core_narrower";

pub const PRIMARY_NAME_EN: &str = "primaryName_en";
pub const PRIMARY_NAME_FR: &str = "primaryName_fr";
pub const PRIMARY_NAME_OTHER: &str = "primaryName_other";
pub const NON_DISPLAY_NAMES: &str = "nonDisplayNames";
pub const ALT_NAMES_EN: &str = "altNames_en";
pub const ALT_NAMES_FR: &str = "altNames_fr";
pub const ROR_PREFERRED: &str = "ror_preferred";
pub const ROR_SECONDARY: &str = "ror_secondary";

/// Known predicates and the column each one fills
///
/// Lineage relation columns are listed here too so the projector can emit
/// them from attributes like any other predicate.
pub const PREDICATE_COLUMNS: &[(&str, &str)] = &[
    (vocab::SKOSXL_PREF_LABEL, PREF_LABEL),
    (vocab::SKOSXL_ALT_LABEL, ALT_LABEL),
    (vocab::COUNTRY, COUNTRY),
    (vocab::STATE, STATE),
    (vocab::CREATED, CREATED),
    (vocab::MODIFIED, MODIFIED),
    (vocab::FUNDING_BODY_TYPE, FUNDING_BODY_TYPE),
    (vocab::FUNDING_BODY_SUB_TYPE, FUNDING_BODY_SUB_TYPE),
    (vocab::TERMS_STATUS, TERMS_STATUS),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/incorporatedInto",
        "crossref_incorporatedInto",
    ),
    ("http://purl.org/dc/terms/isReplacedBy", "dcterms_isReplacedBy"),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/mergedWith",
        "crossref_mergedWith",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/renamedAs",
        "crossref_renamedAs",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/splitInto",
        "crossref_splitInto",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/continuationOf",
        "crossref_continuationOf",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/incorporates",
        "crossref_incorporates",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/mergerOf",
        "crossref_mergerOf",
    ),
    ("http://purl.org/dc/terms/replaces", "dcterms_replaces"),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/splitFrom",
        "crossref_splitFrom",
    ),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/affilWith",
        "crossref_affilWith",
    ),
    (vocab::BROADER, BROADER),
    (vocab::NARROWER, NARROWER),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/region",
        "crossref_region",
    ),
    ("https://none.schema.org/address", "schema.org_address"),
    (
        "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/taxId",
        "crossref_taxId",
    ),
    ("http://www.w3.org/2004/02/skos/core#inScheme", "skos-core_inScheme"),
    (vocab::RDF_TYPE, "rdf-syntax-ns_type"),
];

/// Column for a predicate IRI, if it is one the registry is known to use
pub fn known_column(predicate: &str) -> Option<&'static str> {
    PREDICATE_COLUMNS
        .iter()
        .find(|(iri, _)| *iri == predicate)
        .map(|(_, column)| *column)
}

/// Column for a predicate IRI; unknown predicates keep their IRI as name
pub fn column_for_predicate(predicate: &str) -> String {
    known_column(predicate)
        .map(str::to_string)
        .unwrap_or_else(|| predicate.to_string())
}
