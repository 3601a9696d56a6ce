//! Local key-value storage abstraction

use anyhow::Result;
use async_trait::async_trait;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const SAVED_FUNDS_KEY: &str = "savedFunds";

/// String key-value storage, scoped to the local user.
///
/// Values are JSON-serialized strings. Reads never fail: an unreadable entry
/// is reported as missing.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}
