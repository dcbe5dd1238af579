//! Predicate IRIs used by the Funder Registry dump

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

pub const SKOSXL_PREF_LABEL: &str = "http://www.w3.org/2008/05/skos-xl#prefLabel";
pub const SKOSXL_ALT_LABEL: &str = "http://www.w3.org/2008/05/skos-xl#altLabel";
pub const SKOSXL_LITERAL_FORM: &str = "http://www.w3.org/2008/05/skos-xl#literalForm";

pub const TERMS_USAGE_FLAG: &str = "http://data.crossref.org/fundingdata/termsusageFlag";
pub const TERMS_STATUS: &str = "http://data.crossref.org/fundingdata/termsstatus";

pub const GRANT: &str = "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/";
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

pub const COUNTRY: &str = "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/country";
pub const STATE: &str = "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/state";
pub const FUNDING_BODY_TYPE: &str =
    "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/fundingBodyType";
pub const FUNDING_BODY_SUB_TYPE: &str =
    "http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/fundingBodySubType";
pub const CREATED: &str = "http://purl.org/dc/terms/created";
pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";

/// Prefix stripped from a funder URI to obtain its Funder Registry id
pub const FUNDER_DOI_PREFIX: &str = "http://dx.doi.org/10.13039/";
