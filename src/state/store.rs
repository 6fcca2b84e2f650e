use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use super::data::LabelEntry;
use crate::error::Result;

/// Name of the one table the store owns
pub const TABLE_NAME: &str = "mytable";

/// The LabelStore manages the SQLite file holding submitted labels.
/// It is append-only: rows are never updated or deleted, and duplicates
/// for the same image are all kept.
pub struct LabelStore {
    conn: Connection,
    db_path: PathBuf,
}

impl LabelStore {
    /// Open (or create) the store at `db_path` and make sure the table exists.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&db_path)?;

        log::info!("📁 Label store opened at: {}", db_path.display());

        let store = LabelStore { conn, db_path };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Open a throwaway store that lives only as long as the handle
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = LabelStore {
            conn,
            db_path: PathBuf::from(":memory:"),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the label table if it is missing.
    ///
    /// Safe to call on every cycle. Returns `true` only when this call
    /// created the table. The create itself is `IF NOT EXISTS`, so two
    /// processes racing on a fresh file both succeed.
    pub fn ensure_schema(&self) -> Result<bool> {
        if self.table_names()?.iter().any(|name| name == TABLE_NAME) {
            return Ok(false);
        }

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS mytable (
                image   VARCHAR(80),
                label   VARCHAR(80)
            )",
            [],
        )?;

        log::info!("✅ Created table {}", TABLE_NAME);

        Ok(true)
    }

    /// Names of all tables in the database
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(names)
    }

    /// Append one row. No validation: empty strings are stored as-is.
    pub fn append(&self, image: &str, label: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO mytable (image, label) VALUES (?1, ?2)",
            params![image, label],
        )?;

        log::info!("📝 Stored label {:?} for image {:?}", label, image);

        Ok(())
    }

    /// Every stored row, in whatever order SQLite returns them.
    /// There is no ORDER BY, so callers must not rely on a stable order.
    pub fn all_entries(&self) -> Result<Vec<LabelEntry>> {
        let mut stmt = self.conn.prepare("SELECT image, label FROM mytable")?;

        let entry_iter = stmt.query_map([], |row| {
            Ok(LabelEntry {
                image: row.get(0)?,
                label: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Number of stored rows
    pub fn entry_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM mytable", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }
}

impl std::fmt::Debug for LabelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_table() {
        let store = LabelStore::open_in_memory().unwrap();
        assert_eq!(store.table_names().unwrap(), vec![TABLE_NAME.to_string()]);
        assert_eq!(store.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_ensure_schema_twice() {
        let conn = Connection::open_in_memory().unwrap();
        let store = LabelStore {
            conn,
            db_path: PathBuf::from(":memory:"),
        };

        assert!(store.ensure_schema().unwrap());
        assert!(!store.ensure_schema().unwrap());
        assert_eq!(store.table_names().unwrap().len(), 1);
    }

    #[test]
    fn test_n_submissions_stored_verbatim() {
        let store = LabelStore::open_in_memory().unwrap();
        let submitted = [("3", "3"), ("7", "1"), ("0", ""), ("7", "1"), ("9", "it's a 9")];

        for (image, label) in submitted {
            store.append(image, label).unwrap();
        }

        let mut stored: Vec<(String, String)> = store
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| (e.image, e.label))
            .collect();
        let mut expected: Vec<(String, String)> = submitted
            .iter()
            .map(|(i, l)| (i.to_string(), l.to_string()))
            .collect();
        stored.sort();
        expected.sort();

        assert_eq!(stored, expected);
        assert_eq!(store.entry_count().unwrap(), submitted.len() as i64);
    }

    #[test]
    fn test_round_trip_exact_strings() {
        let store = LabelStore::open_in_memory().unwrap();
        store.append("5", "5").unwrap();

        let long_label = "x".repeat(79);
        store.append("5", &long_label).unwrap();

        let entries = store.all_entries().unwrap();
        assert!(entries.contains(&LabelEntry::new("5", "5")));
        assert!(entries.contains(&LabelEntry::new("5", long_label)));
    }

    #[test]
    fn test_submit_recreates_dropped_table() {
        use crate::dataset::DigitDataset;
        use crate::session::LabelingSession;
        use rand::{rngs::StdRng, SeedableRng};

        let store = LabelStore::open_in_memory().unwrap();
        store.conn.execute("DROP TABLE mytable", []).unwrap();
        assert!(store.table_names().unwrap().is_empty());

        let dataset = DigitDataset::load().unwrap();
        let session = LabelingSession::with_rng(dataset, StdRng::seed_from_u64(1));
        let entry = session.on_submit(&store, "q").unwrap();

        assert_eq!(entry.label, "q");
        assert_eq!(store.entry_count().unwrap(), 1);
        assert_eq!(store.all_entries().unwrap(), vec![entry]);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("labels.db");

        {
            let store = LabelStore::open(&db_path).unwrap();
            store.append("4", "4").unwrap();
        }

        let store = LabelStore::open(&db_path).unwrap();
        assert_eq!(store.all_entries().unwrap(), vec![LabelEntry::new("4", "4")]);
        assert_eq!(store.path(), &db_path);
    }
}
