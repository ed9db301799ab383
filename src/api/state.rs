//! Shared application state

use parking_lot::Mutex;

use crate::event_store::{BackupManager, EventStore, EventStoreConfig};

/// State shared by every request handler
///
/// Ingestion and read views touch the store without locking. Backup, restore
/// and clear take `management` so they never interleave with each other.
pub struct AppState {
    pub store: EventStore,
    pub backups: BackupManager,
    pub management: Mutex<()>,
}

impl AppState {
    pub fn new(config: EventStoreConfig) -> Self {
        Self {
            store: EventStore::new(config.clone()),
            backups: BackupManager::new(config),
            management: Mutex::new(()),
        }
    }
}
