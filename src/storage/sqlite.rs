//! SQLite snapshot of the registry graph

use super::traits::{OpenStore, SnapshotInfo, StorageError, StorageResult, TripleSnapshot};
use crate::graph::{Term, Triple};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

/// SQLite-backed triple snapshot
///
/// One `triples` table holding the parsed graph and a single-row
/// `snapshot_meta` table describing where it came from.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS triples (
                seq INTEGER PRIMARY KEY,
                subject_kind TEXT NOT NULL,
                subject TEXT NOT NULL,
                predicate TEXT NOT NULL,
                object_kind TEXT NOT NULL,
                object TEXT NOT NULL,
                lang TEXT
            );

            CREATE TABLE IF NOT EXISTS snapshot_meta (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                source TEXT NOT NULL,
                triple_count INTEGER NOT NULL,
                loaded_at TEXT NOT NULL
            );

            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn row_to_term(kind: &str, value: String, lang: Option<String>) -> StorageResult<Term> {
        match kind {
            "iri" => Ok(Term::iri(value)),
            "blank" => Ok(Term::blank(value)),
            "literal" => Ok(match lang {
                Some(lang) => Term::lang_literal(value, lang),
                None => Term::literal(value),
            }),
            other => Err(StorageError::Corrupt(format!("unknown term kind: {}", other))),
        }
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl TripleSnapshot for SqliteStore {
    fn save_triples(&self, triples: &[Triple], source: &str) -> StorageResult<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM triples", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO triples (subject_kind, subject, predicate, object_kind, object, lang)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for triple in triples {
                stmt.execute(params![
                    triple.subject.kind(),
                    triple.subject.as_str(),
                    triple.predicate,
                    triple.object.kind(),
                    triple.object.as_str(),
                    triple.object.language(),
                ])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO snapshot_meta (id, source, triple_count, loaded_at)
             VALUES (1, ?1, ?2, ?3)",
            params![source, triples.len() as i64, Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(triples.len())
    }

    fn load_triples(&self) -> StorageResult<Vec<Triple>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT subject_kind, subject, predicate, object_kind, object, lang
             FROM triples ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut triples = Vec::new();
        for row in rows {
            let (subject_kind, subject, predicate, object_kind, object, lang) = row?;
            let subject = Self::row_to_term(&subject_kind, subject, None)?;
            let object = Self::row_to_term(&object_kind, object, lang)?;
            triples.push(Triple::new(subject, predicate, object));
        }
        Ok(triples)
    }

    fn snapshot_info(&self) -> StorageResult<Option<SnapshotInfo>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT source, triple_count, loaded_at FROM snapshot_meta WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((source, triple_count, loaded_at)) = row else {
            return Ok(None);
        };
        let loaded_at = DateTime::parse_from_rfc3339(&loaded_at)
            .map_err(|e| StorageError::DateParse(e.to_string()))?
            .with_timezone(&Utc);
        Ok(Some(SnapshotInfo {
            source,
            triple_count: triple_count as usize,
            loaded_at,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    fn sample_triples() -> Vec<Triple> {
        vec![
            Triple::new(
                Term::iri("http://dx.doi.org/10.13039/1"),
                "http://www.w3.org/2008/05/skos-xl#prefLabel",
                Term::blank("b0"),
            ),
            Triple::new(
                Term::blank("b0"),
                "http://www.w3.org/2008/05/skos-xl#literalForm",
                Term::lang_literal("Fonds de recherche", "fr"),
            ),
            Triple::new(
                Term::iri("http://dx.doi.org/10.13039/1"),
                "http://purl.org/dc/terms/created",
                Term::literal("2012-05-01"),
            ),
        ]
    }

    #[test]
    fn test_save_and_load_triples() {
        let store = create_test_store();
        let triples = sample_triples();
        assert_eq!(store.save_triples(&triples, "registry.rdf").unwrap(), 3);
        assert_eq!(store.load_triples().unwrap(), triples);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let store = create_test_store();
        store.save_triples(&sample_triples(), "old.rdf").unwrap();
        store.save_triples(&sample_triples()[..1], "new.rdf").unwrap();

        assert_eq!(store.load_triples().unwrap().len(), 1);
        let info = store.snapshot_info().unwrap().unwrap();
        assert_eq!(info.source, "new.rdf");
        assert_eq!(info.triple_count, 1);
    }

    #[test]
    fn test_empty_store_has_no_info() {
        let store = create_test_store();
        assert!(store.snapshot_info().unwrap().is_none());
        assert!(store.load_triples().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("registry.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.save_triples(&sample_triples(), "registry.rdf").unwrap();
        }
        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.load_triples().unwrap(), sample_triples());
    }
}
