pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::storage::KeyValueStorage;
use disk::DiskStorage;
use memory::MemoryStorage;
use std::sync::Arc;
use tracing::warn;

/// Opens the local storage for the configured data path.
///
/// Falls back to a process-local memory store when the disk store cannot be
/// opened, so views still work for the current command.
pub fn open_storage(config: &AppConfig) -> Arc<dyn KeyValueStorage> {
    let opened = config
        .data_path()
        .and_then(|path| DiskStorage::open(&path.join("storage")));

    match opened {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!("Could not open local storage: {e:#}. Changes will not persist.");
            Arc::new(MemoryStorage::new())
        }
    }
}
