use crate::core::storage::KeyValueStorage;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory storage backed by a HashMap
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.inner.lock().await;
        let value = entries.get(key).cloned();
        if value.is_some() {
            debug!("Storage HIT for key: {}", key);
        } else {
            debug!("Storage MISS for key: {}", key);
        }
        value
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.inner.lock().await;
        debug!("Storage SET for key: {}", key);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.inner.lock().await;
        entries.remove(key);
        debug!("Storage REMOVE for key: {}", key);
        Ok(())
    }
}
