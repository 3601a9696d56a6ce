//! The saved-fund set kept in local storage

use super::fund::FundSummary;
use super::storage::{KeyValueStorage, SAVED_FUNDS_KEY};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    AlreadySaved,
}

/// Ordered bookmark list, persisted as one JSON array.
///
/// Every call reads the list fresh from storage. Mutations of one instance
/// are serialized, so a read-modify-write never interleaves with another.
#[derive(Clone)]
pub struct SavedFunds {
    storage: Arc<dyn KeyValueStorage>,
    write_lock: Arc<Mutex<()>>,
}

impl SavedFunds {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All saved funds in insertion order.
    ///
    /// A missing or non-array entry reads as empty. Elements that fail to parse
    /// are skipped, so the valid ones survive the next write.
    pub async fn list(&self) -> Vec<FundSummary> {
        let Some(raw) = self.storage.get(SAVED_FUNDS_KEY).await else {
            return Vec::new();
        };
        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed saved funds entry: {}", e);
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(fund) => Some(fund),
                Err(e) => {
                    warn!("Skipping malformed saved fund: {}", e);
                    None
                }
            })
            .collect()
    }

    pub async fn contains(&self, scheme_code: u64) -> bool {
        self.list()
            .await
            .iter()
            .any(|f| f.scheme_code == scheme_code)
    }

    /// Appends the fund unless one with the same scheme code is already saved.
    pub async fn save(&self, fund: &FundSummary) -> Result<SaveOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut funds = self.list().await;
        if funds.iter().any(|f| f.scheme_code == fund.scheme_code) {
            debug!("Fund {} is already saved", fund.scheme_code);
            return Ok(SaveOutcome::AlreadySaved);
        }

        funds.push(fund.clone());
        self.write(&funds).await?;
        info!("Saved fund {}", fund.scheme_code);
        Ok(SaveOutcome::Added)
    }

    /// Removes every entry with the scheme code. Returns whether anything was removed.
    pub async fn remove(&self, scheme_code: u64) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut funds = self.list().await;
        let before = funds.len();
        funds.retain(|f| f.scheme_code != scheme_code);
        if funds.len() == before {
            return Ok(false);
        }

        self.write(&funds).await?;
        info!("Removed saved fund {}", scheme_code);
        Ok(true)
    }

    async fn write(&self, funds: &[FundSummary]) -> Result<()> {
        let json = serde_json::to_string(funds).context("Failed to serialize saved funds")?;
        self.storage
            .set(SAVED_FUNDS_KEY, &json)
            .await
            .context("Failed to persist saved funds")
    }
}
