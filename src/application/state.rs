// src/application/state.rs

use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::KvSetRepository;
use crate::services::{BrowseService, ImportService, SetService};
use crate::storage::{FileStore, KeyValueStore};

/// Application state, constructed once per process with the durable
/// store injected. All fields are Arc-wrapped for sharing across an
/// embedding frontend's handlers. There is no other process-wide state.
pub struct AppState {
    pub import_service: Arc<ImportService>,
    pub set_service: Arc<SetService>,
    pub browse_service: Arc<BrowseService>,
}

impl AppState {
    /// Wire the services over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let repo = Arc::new(KvSetRepository::new(store));
        Self {
            import_service: Arc::new(ImportService::new()),
            set_service: Arc::new(SetService::new(repo)),
            browse_service: Arc::new(BrowseService::new()),
        }
    }

    /// Wire the services over a file store in the platform data
    /// directory ({APP_DATA}/bookhub/).
    pub fn with_default_storage() -> AppResult<Self> {
        let store = Arc::new(FileStore::with_default_dir()?);
        Ok(Self::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CreateSetRequest;
    use crate::storage::MemoryStore;

    #[test]
    fn test_state_wires_services_over_one_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()));

        let books = state
            .import_service
            .normalize("Title,Author\nDune,Frank Herbert");
        let set = state
            .set_service
            .create_set(CreateSetRequest {
                name: "Imported".to_string(),
                books,
                code: Some("1234".to_string()),
            })
            .unwrap();

        let fetched = state.set_service.get_set("imported", "1234").unwrap();
        assert_eq!(fetched.unwrap().id, set.id);
    }
}
