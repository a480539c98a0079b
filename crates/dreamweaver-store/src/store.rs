//! Dream store interface and the SQLite implementation.

use crate::error::StoreError;
use crate::model::{DreamRecord, NewDream};
use chrono::Utc;
use log::{debug, info};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

const CREATE_DREAMS_TABLE: &str = "CREATE TABLE IF NOT EXISTS dreams (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    latitude REAL,
    longitude REAL,
    image TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// Append-only persistence for dream records.
pub trait DreamStore: Send + Sync {
    /// Create the backing table if it does not exist yet. Idempotent.
    fn initialize(&self) -> Result<(), StoreError>;
    /// Append a record, stamping the creation time, and return its id.
    fn insert(&self, dream: NewDream) -> Result<i64, StoreError>;
    /// List every record, most recently created first.
    fn list_all(&self) -> Result<Vec<DreamRecord>, StoreError>;
}

/// SQLite-backed store that opens a fresh connection per operation.
#[derive(Debug, Clone)]
pub struct SqliteDreamStore {
    /// Database file location.
    path: PathBuf,
}

impl SqliteDreamStore {
    /// Create a store for the database file at `path`.
    ///
    /// Parent directories are created; the file itself is created by SQLite on
    /// first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        info!("opened dream store (path={})", path.display());
        Ok(Self { path })
    }

    /// Database file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }
}

impl DreamStore for SqliteDreamStore {
    fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(CREATE_DREAMS_TABLE, [])?;
        debug!("dreams table ready (path={})", self.path.display());
        Ok(())
    }

    fn insert(&self, dream: NewDream) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO dreams (text, latitude, longitude, image, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                dream.text,
                dream.latitude,
                dream.longitude,
                dream.image,
                Utc::now()
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(
            "stored dream (id={}, text_len={}, located={})",
            id,
            dream.text.len(),
            dream.latitude.is_some() && dream.longitude.is_some()
        );
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<DreamRecord>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, text, latitude, longitude, image, created_at
             FROM dreams ORDER BY created_at DESC, id DESC",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(DreamRecord {
                    id: row.get(0)?,
                    text: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                    image: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("listed dreams (count={})", records.len());
        Ok(records)
    }
}
