//! Pipeline configuration
//!
//! Defaults reproduce the Canadian export: geonames IRIs for Canada and
//! its provinces, ROR country code `CA`, inputs under `registry_data/`
//! and outputs under `output_data/`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Country targeted by the regional and bilingual exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jurisdiction {
    /// Value of the registry's country predicate for this jurisdiction
    pub country_uri: String,
    /// Readable name written in place of `country_uri`
    pub country_name: String,
    /// Country code used by ROR records
    pub ror_country_code: String,
    /// Region IRI → readable name
    pub states: BTreeMap<String, String>,
}

impl Default for Jurisdiction {
    fn default() -> Self {
        let states = [
            ("http://sws.geonames.org/6141242/", "Saskatchewan"),
            ("http://sws.geonames.org/6093943/", "Ontario"),
            ("http://sws.geonames.org/6115047/", "Quebec"),
            ("http://sws.geonames.org/5909050/", "British Columbia"),
            ("http://sws.geonames.org/5883102/", "Alberta"),
            ("http://sws.geonames.org/6065171/", "Manitoba"),
            ("http://sws.geonames.org/6087430/", "New Brunswick"),
            ("http://sws.geonames.org/6091530/", "Nova Scotia"),
            ("http://sws.geonames.org/6354959/", "Newfoundland and Labrador"),
            ("http://sws.geonames.org/6113358/", "Prince Edward Island"),
            ("http://sws.geonames.org/6091069/", "Northwest Territories"),
            ("http://sws.geonames.org/6091732/", "Nunavut"),
        ]
        .into_iter()
        .map(|(uri, name)| (uri.to_string(), name.to_string()))
        .collect();

        Self {
            country_uri: "http://sws.geonames.org/6251999/".to_string(),
            country_name: "Canada".to_string(),
            ror_country_code: "CA".to_string(),
            states,
        }
    }
}

impl Jurisdiction {
    pub fn state_name(&self, uri: &str) -> Option<&str> {
        self.states.get(uri).map(|s| s.as_str())
    }
}

/// File locations and jurisdiction for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// RDF/XML dump, relative to `data_dir`
    pub registry_rdf: PathBuf,
    /// SQLite snapshot, relative to `data_dir`
    pub snapshot: PathBuf,
    /// ROR JSON dump used for identifier enrichment, relative to `data_dir`
    pub ror_dump: PathBuf,
    pub jurisdiction: Jurisdiction,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("registry_data"),
            output_dir: PathBuf::from("output_data"),
            registry_rdf: PathBuf::from("registry.rdf"),
            snapshot: PathBuf::from("registry.db"),
            ror_dump: PathBuf::from("ror-data.json"),
            jurisdiction: Jurisdiction::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Per-user config file (`~/.config/fundex/config.yaml`), if present
    pub fn user_config_path() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("fundex").join("config.yaml");
        path.exists().then_some(path)
    }

    /// Resolve an input file: absolute or existing paths are used as given,
    /// anything else is looked up under `data_dir`
    pub fn data_path(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        if name.is_absolute() || name.exists() {
            name.to_path_buf()
        } else {
            self.data_dir.join(name)
        }
    }

    pub fn output_path(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.output_dir.join(name)
        }
    }

    pub fn registry_rdf_path(&self) -> PathBuf {
        self.data_path(&self.registry_rdf)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_path(&self.snapshot)
    }

    pub fn ror_dump_path(&self) -> PathBuf {
        self.data_path(&self.ror_dump)
    }
}
