//! Shared fixtures for the end-to-end export tests
//!
//! `Workspace` lays out a temporary data/output directory pair with a
//! small registry dump, a ROR dump and an override table.

#![allow(dead_code)]

use fundex::PipelineConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const OLD_COUNCIL: &str = "http://dx.doi.org/10.13039/100";
pub const NEW_COUNCIL: &str = "http://dx.doi.org/10.13039/200";
pub const RETIRED_FUND: &str = "http://dx.doi.org/10.13039/300";
pub const PARTNER_AGENCY: &str = "http://dx.doi.org/10.13039/400";

pub const CANADA: &str = "http://sws.geonames.org/6251999/";
pub const ONTARIO: &str = "http://sws.geonames.org/6093943/";
pub const USA: &str = "http://sws.geonames.org/6252001/";

pub const EXTRA_PREDICATE: &str = "http://example.org/vocab#note";

const RDF_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:skos="http://www.w3.org/2004/02/skos/core#"
         xmlns:skosxl="http://www.w3.org/2008/05/skos-xl#"
         xmlns:dct="http://purl.org/dc/terms/"
         xmlns:fref="http://data.crossref.org/fundingdata/"
         xmlns:svf="http://data.crossref.org/fundingdata/xml/schema/grant/grant-1.2/"
         xmlns:ex="http://example.org/vocab#">
"#;

/// An alternate label: value, language, acronym flag
pub type Alt<'a> = (&'a str, &'a str, bool);

fn label_xml(property: &str, value: &str, lang: &str, acronym: bool) -> String {
    let flag = if acronym {
        "\n        <fref:termsusageFlag rdf:resource=\"http://data.crossref.org/fundingdata/vocabulary/acronym\"/>"
    } else {
        ""
    };
    format!(
        r#"    <skosxl:{property}>
      <skosxl:Label>
        <skosxl:literalForm xml:lang="{lang}">{value}</skosxl:literalForm>{flag}
      </skosxl:Label>
    </skosxl:{property}>
"#
    )
}

/// One SKOS concept; `body` holds any further property elements
pub fn concept_xml(id: &str, pref: (&str, &str), alts: &[Alt<'_>], body: &str) -> String {
    let mut xml = format!("  <skos:Concept rdf:about=\"{}\">\n", id);
    xml.push_str(&label_xml("prefLabel", pref.0, pref.1, false));
    for (value, lang, acronym) in alts {
        xml.push_str(&label_xml("altLabel", value, lang, *acronym));
    }
    xml.push_str(body);
    xml.push_str("  </skos:Concept>\n");
    xml
}

pub fn registry_xml(concepts: &[String]) -> String {
    let mut xml = RDF_HEADER.to_string();
    for concept in concepts {
        xml.push_str(concept);
    }
    xml.push_str("</rdf:RDF>\n");
    xml
}

/// Old Council was renamed New Council; Partner Agency replaced the
/// deprecated Retired Fund.
pub fn sample_registry() -> String {
    registry_xml(&[
        concept_xml(
            OLD_COUNCIL,
            ("Old Council", "en"),
            &[],
            &format!(
                "    <svf:country rdf:resource=\"{CANADA}\"/>\n    <svf:renamedAs rdf:resource=\"{NEW_COUNCIL}\"/>\n"
            ),
        ),
        concept_xml(
            NEW_COUNCIL,
            ("New Council", "en"),
            &[("NC", "en", true), ("Nouveau conseil", "fr", false)],
            &format!(
                "    <svf:country rdf:resource=\"{CANADA}\"/>\n    <svf:state rdf:resource=\"{ONTARIO}\"/>\n    <dct:created>2010-01-01</dct:created>\n    <dct:modified>2020-06-30</dct:modified>\n    <svf:fundingBodyType>gov</svf:fundingBodyType>\n"
            ),
        ),
        concept_xml(
            RETIRED_FUND,
            ("Retired Fund", "en"),
            &[],
            &format!(
                "    <svf:country rdf:resource=\"{USA}\"/>\n    <fref:termsstatus>Deprecated</fref:termsstatus>\n"
            ),
        ),
        concept_xml(
            PARTNER_AGENCY,
            ("Partner Agency", "en"),
            &[],
            &format!(
                "    <svf:country rdf:resource=\"{USA}\"/>\n    <dct:replaces rdf:resource=\"{RETIRED_FUND}\"/>\n    <ex:note>hello</ex:note>\n"
            ),
        ),
    ])
}

pub const SAMPLE_ROR: &str = r#"[
  {
    "id": "https://ror.org/0newcncl",
    "name": "New Council",
    "status": "active",
    "aliases": [],
    "acronyms": ["NC"],
    "labels": [{"label": "Nouveau conseil", "iso639": "fr"}],
    "country": {"country_code": "CA", "country_name": "Canada"},
    "external_ids": {"FundRef": {"preferred": null, "all": ["200"]}}
  },
  {
    "id": "https://ror.org/0elsewhr",
    "name": "University of Elsewhere",
    "status": "active",
    "aliases": ["Elsewhere U"],
    "acronyms": [],
    "labels": [],
    "country": {"country_code": "US", "country_name": "United States"},
    "external_ids": {"FundRef": {"preferred": "400", "all": "400"}}
  }
]"#;

pub const SAMPLE_OVERRIDES: &str =
    "id\tname_en\tname_fr\taltnames\nhttps://ror.org/0newcncl\t\tConseil nouveau\tCouncil||NC\n";

/// Temporary data and output directories plus a config pointing at them
pub struct Workspace {
    pub dir: TempDir,
    pub config: PipelineConfig,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = PipelineConfig {
            data_dir: dir.path().join("registry_data"),
            output_dir: dir.path().join("output_data"),
            ..Default::default()
        };
        std::fs::create_dir_all(&config.data_dir).expect("create data dir");
        Self { dir, config }
    }

    /// Workspace with the sample registry, ROR dump and overrides in place
    pub fn with_samples() -> Self {
        let ws = Self::new();
        ws.write_data("registry.rdf", &sample_registry());
        ws.write_data("ror-data.json", SAMPLE_ROR);
        ws.write_data("overrides.tsv", SAMPLE_OVERRIDES);
        ws
    }

    pub fn write_data(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.config.data_dir.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Parse the registry dump into the snapshot
    pub fn load(&self) -> usize {
        fundex::pipeline::load_snapshot(&self.config.registry_rdf_path(), &self.config.snapshot_path())
            .expect("load snapshot")
    }
}

/// A parsed CSV file
pub struct Csv {
    pub header: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl Csv {
    pub fn read(path: &Path) -> Self {
        let mut reader = csv::Reader::from_path(path).expect("open csv");
        let header: Vec<String> = reader
            .headers()
            .expect("csv header")
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .records()
            .map(|record| {
                let record = record.expect("csv row");
                header
                    .iter()
                    .cloned()
                    .zip(record.iter().map(str::to_string))
                    .collect()
            })
            .collect();
        Self { header, rows }
    }

    /// Row whose `column` equals `value`
    pub fn row(&self, column: &str, value: &str) -> Option<&HashMap<String, String>> {
        self.rows
            .iter()
            .find(|row| row.get(column).map(String::as_str) == Some(value))
    }

    pub fn cell<'a>(&'a self, key_column: &str, key: &str, column: &str) -> &'a str {
        self.row(key_column, key)
            .and_then(|row| row.get(column))
            .map(String::as_str)
            .unwrap_or_else(|| panic!("no {} cell for {}", column, key))
    }
}
