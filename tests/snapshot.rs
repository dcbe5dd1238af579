//! Snapshot loading and reopening

mod common;

use common::*;
use fundex::graph::LoadError;
use fundex::pipeline::{export_funders, load_snapshot, snapshot_info};
use fundex::{FundexError, OpenStore, Profile, SqliteStore, TripleSnapshot};

#[test]
fn load_records_source_and_count() {
    let ws = Workspace::with_samples();
    let count = ws.load();
    assert!(count > 0);

    let info = snapshot_info(&ws.config.snapshot_path()).unwrap().unwrap();
    assert_eq!(info.triple_count, count);
    assert!(info.source.ends_with("registry.rdf"));

    let store = SqliteStore::open(ws.config.snapshot_path()).unwrap();
    assert_eq!(store.load_triples().unwrap().len(), count);
}

#[test]
fn reloading_replaces_the_snapshot() {
    let ws = Workspace::with_samples();
    ws.load();

    ws.write_data(
        "registry.rdf",
        &registry_xml(&[concept_xml(NEW_COUNCIL, ("New Council", "en"), &[], "")]),
    );
    ws.load();

    let summary = export_funders(&ws.config, Profile::Full, false, None).unwrap();
    assert_eq!(summary.rows, 1);
}

#[test]
fn export_without_snapshot_names_the_load_step() {
    let ws = Workspace::new();
    let err = export_funders(&ws.config, Profile::Full, false, None).unwrap_err();
    assert!(matches!(err, FundexError::SnapshotMissing { .. }));
    assert!(err.to_string().contains("fundex load"));
}

#[test]
fn load_without_dump_fails() {
    let ws = Workspace::new();
    let err = load_snapshot(&ws.config.registry_rdf_path(), &ws.config.snapshot_path()).unwrap_err();
    assert!(matches!(err, FundexError::Load(LoadError::NotFound { .. })));
}
