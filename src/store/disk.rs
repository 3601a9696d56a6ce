use crate::core::storage::KeyValueStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION_NAME: &str = "local";

/// Persistent storage kept in a fjall keyspace on disk.
pub struct DiskStorage {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStorage {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create storage directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION_NAME, PartitionCreateOptions::default())
            .context("Failed to open storage partition")?;

        debug!("Opened disk storage at {}", path.display());
        Ok(Self {
            keyspace,
            partition,
        })
    }

    fn persist(&self) -> Result<()> {
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to flush storage to disk")
    }
}

#[async_trait]
impl KeyValueStorage for DiskStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let res: Result<Option<String>> = (|| {
            match self.partition.get(key)? {
                Some(bytes) => {
                    debug!("Storage HIT for key: {}", key);
                    Ok(Some(String::from_utf8(bytes.to_vec())?))
                }
                None => {
                    debug!("Storage MISS for key: {}", key);
                    Ok(None)
                }
            }
        })();

        match res {
            Ok(val) => val,
            Err(e) => {
                debug!("DiskStorage get error for key {}: {}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.partition
            .insert(key, value)
            .with_context(|| format!("Failed to write storage key: {key}"))?;
        debug!("Storage SET for key: {}", key);
        self.persist()
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.partition
            .remove(key)
            .with_context(|| format!("Failed to remove storage key: {key}"))?;
        debug!("Storage REMOVE for key: {}", key);
        self.persist()
    }
}
