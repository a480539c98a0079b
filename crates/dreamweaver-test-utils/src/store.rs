use chrono::Utc;
use dreamweaver_store::{DreamRecord, DreamStore, NewDream, SqliteDreamStore, StoreError};
use parking_lot::Mutex;
use tempfile::TempDir;

/// In-memory store with the same ordering contract as the SQLite one.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<DreamRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records inserted so far.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DreamStore for MemoryStore {
    fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn insert(&self, dream: NewDream) -> Result<i64, StoreError> {
        let mut records = self.records.lock();
        let id = records.len() as i64 + 1;
        records.push(DreamRecord {
            id,
            text: dream.text,
            latitude: dream.latitude,
            longitude: dream.longitude,
            image: dream.image,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<DreamRecord>, StoreError> {
        Ok(self.records.lock().iter().rev().cloned().collect())
    }
}

/// Store whose every operation fails, for exercising error envelopes.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Io(std::io::Error::other(self.message.clone()))
    }
}

impl DreamStore for FailingStore {
    fn initialize(&self) -> Result<(), StoreError> {
        Err(self.error())
    }

    fn insert(&self, _dream: NewDream) -> Result<i64, StoreError> {
        Err(self.error())
    }

    fn list_all(&self) -> Result<Vec<DreamRecord>, StoreError> {
        Err(self.error())
    }
}

/// Initialized SQLite store in a fresh temp dir; keep the dir alive.
pub fn temp_store() -> (TempDir, SqliteDreamStore) {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = SqliteDreamStore::open(temp.path().join("dreams.db")).expect("store");
    store.initialize().expect("initialize");
    (temp, store)
}
