//! Session record: the locally persisted token and user profile

use super::storage::{KeyValueStorage, TOKEN_KEY, USER_KEY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any other fields stored with the profile.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Reads and writes the session entries of the injected storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// The session token, if one is stored and non-empty.
    pub async fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .await
            .filter(|t| !t.trim().is_empty())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.token().await.is_some()
    }

    /// The stored profile. A missing or malformed entry reads as an empty profile.
    pub async fn user(&self) -> UserProfile {
        let Some(raw) = self.storage.get(USER_KEY).await else {
            return UserProfile::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!("Ignoring malformed user entry: {}", e);
            UserProfile::default()
        })
    }

    pub async fn login(&self, token: &str, user: &UserProfile) -> Result<()> {
        let user_json = serde_json::to_string(user).context("Failed to serialize user profile")?;
        self.storage.set(TOKEN_KEY, token).await?;
        self.storage.set(USER_KEY, &user_json).await?;
        info!("Logged in as {}", user.display_name());
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY).await?;
        self.storage.remove(USER_KEY).await?;
        info!("Logged out");
        Ok(())
    }
}
