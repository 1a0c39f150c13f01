// src/repositories/set_repository.rs

use std::sync::Arc;

use crate::domain::book_set::BookSet;
use crate::error::AppResult;
use crate::storage::KeyValueStore;

/// Fixed storage key the whole collection is persisted under.
pub const STORAGE_KEY: &str = "bookhub-sets";

#[cfg_attr(test, mockall::automock)]
pub trait SetRepository: Send + Sync {
    /// Read and deserialize the full collection. Missing or unparsable
    /// stored data yields an empty collection, never an error.
    fn list_all(&self) -> AppResult<Vec<BookSet>>;

    /// Find one set by id (linear scan over the collection).
    fn get_by_id(&self, id: &str) -> AppResult<Option<BookSet>>;

    /// Insert or replace by id, then persist the full collection.
    fn save(&self, set: &BookSet) -> AppResult<()>;

    /// Remove by id, then persist. No-op if the id is absent.
    fn delete(&self, id: &str) -> AppResult<()>;
}

/// Key-value-backed repository. The entire collection is serialized as
/// one JSON array under `STORAGE_KEY`; every mutation is a full
/// read-modify-write of that value.
pub struct KvSetRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvSetRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn read_collection(&self) -> AppResult<Vec<BookSet>> {
        let raw = match self.store.get(STORAGE_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(sets) => Ok(sets),
            Err(e) => {
                // Corrupt storage is treated as empty; the next save
                // overwrites it.
                log::warn!("stored set collection is unparsable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn write_collection(&self, sets: &[BookSet]) -> AppResult<()> {
        let raw = serde_json::to_string(sets)?;
        self.store.set(STORAGE_KEY, &raw)
    }
}

impl SetRepository for KvSetRepository {
    fn list_all(&self) -> AppResult<Vec<BookSet>> {
        self.read_collection()
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<BookSet>> {
        let sets = self.read_collection()?;
        Ok(sets.into_iter().find(|s| s.id == id))
    }

    fn save(&self, set: &BookSet) -> AppResult<()> {
        let mut sets = self.read_collection()?;
        match sets.iter_mut().find(|s| s.id == set.id) {
            Some(existing) => *existing = set.clone(),
            None => sets.push(set.clone()),
        }
        self.write_collection(&sets)
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut sets = self.read_collection()?;
        sets.retain(|s| s.id != id);
        self.write_collection(&sets)
    }
}
