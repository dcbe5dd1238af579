//! End-to-end steps driven by the CLI

use crate::config::PipelineConfig;
use crate::crossref::{load_identifier_map, load_ror_dump, IdentifierMap};
use crate::entity::EntityId;
use crate::error::{FundexError, FundexResult};
use crate::export::{
    project_affiliation, write_csv, MetadataProjector, OverrideTable, Profile, Record, AFFILIATION_COLUMNS,
    AFFILIATION_FILE_NAME,
};
use crate::graph::{read_rdf_xml, TripleStore};
use crate::lineage::LineageReport;
use crate::registry::Registry;
use crate::storage::{OpenStore, SnapshotInfo, SqliteStore, TripleSnapshot};
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Parse the RDF/XML dump and replace the snapshot with its triples
pub fn load_snapshot(rdf: &Path, db: &Path) -> FundexResult<usize> {
    let triples = read_rdf_xml(rdf)?;
    let store = SqliteStore::open(db)?;
    let saved = store.save_triples(&triples, &rdf.display().to_string())?;
    info!(triples = saved, db = %db.display(), "saved registry snapshot");
    Ok(saved)
}

fn open_snapshot(db: &Path) -> FundexResult<SqliteStore> {
    if !db.exists() {
        return Err(FundexError::SnapshotMissing {
            path: db.display().to_string(),
        });
    }
    Ok(SqliteStore::open(db)?)
}

/// Rebuild the annotated registry from a snapshot
pub fn open_registry(db: &Path) -> FundexResult<Registry> {
    let store = open_snapshot(db)?;
    let triples = store.load_triples()?;
    info!(triples = triples.len(), db = %db.display(), "loaded registry snapshot");
    Ok(Registry::build(&TripleStore::from_triples(triples)))
}

pub fn snapshot_info(db: &Path) -> FundexResult<Option<SnapshotInfo>> {
    Ok(open_snapshot(db)?.snapshot_info()?)
}

/// Project every entity of `registry` under `profile`
pub fn funder_records(
    registry: &Registry,
    projector: &MetadataProjector<'_>,
    profile: Profile,
    only_jurisdiction: bool,
) -> Vec<Record> {
    registry
        .entities()
        .filter(|entity| !only_jurisdiction || projector.in_jurisdiction(entity))
        .filter_map(|entity| projector.project(entity, profile))
        .collect()
}

/// Write the funder export for `profile`
pub fn export_funders(
    config: &PipelineConfig,
    profile: Profile,
    only_jurisdiction: bool,
    out: Option<&Path>,
) -> FundexResult<ExportSummary> {
    let registry = open_registry(&config.snapshot_path())?;

    let identifiers = if profile == Profile::Regional {
        load_identifier_map(config.ror_dump_path(), &config.jurisdiction.ror_country_code)?
    } else {
        IdentifierMap::new()
    };
    let projector = MetadataProjector::new(&config.jurisdiction, &identifiers);

    let records = funder_records(&registry, &projector, profile, only_jurisdiction);
    let header = profile.header(registry.extra_columns());
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_path(profile.file_name()));
    info!(%profile, rows = records.len(), path = %path.display(), "writing funder export");
    let rows = write_csv(&path, &header, &records)?;
    Ok(ExportSummary { path, rows })
}

/// Write the affiliation partner feed from a ROR dump
pub fn export_affiliations(
    config: &PipelineConfig,
    data: &Path,
    overrides: Option<&Path>,
    out: Option<&Path>,
) -> FundexResult<ExportSummary> {
    let records = load_ror_dump(config.data_path(data))?;
    let overrides = match overrides {
        Some(path) => OverrideTable::load(config.data_path(path))?,
        None => OverrideTable::new(),
    };

    let rows: Vec<Record> = records
        .iter()
        .map(|record| project_affiliation(record, &overrides))
        .collect();
    let header: Vec<String> = AFFILIATION_COLUMNS.iter().map(|c| c.to_string()).collect();
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_path(AFFILIATION_FILE_NAME));
    let rows = write_csv(&path, &header, &rows)?;
    Ok(ExportSummary { path, rows })
}

/// Lineage report for one entity; accepts a full IRI or a bare registry id
pub fn lineage_report(config: &PipelineConfig, id: &str) -> FundexResult<LineageReport> {
    let registry = open_registry(&config.snapshot_path())?;
    let id = EntityId::parse(id);
    registry
        .lineage(&id)
        .ok_or_else(|| FundexError::EntityNotFound(id.to_string()))
}
