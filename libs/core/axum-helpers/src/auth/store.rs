//! Server-side registry of issued tokens.
//!
//! A signed JWT is only accepted while its `jti` is present in the store,
//! which is what makes logout and revocation possible.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub jti: Uuid,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save(&self, record: TokenRecord) -> eyre::Result<()>;

    /// True when `jti` is stored and not yet expired. Implementations may
    /// record the usage.
    async fn is_active(&self, jti: Uuid) -> eyre::Result<bool>;

    async fn revoke(&self, jti: Uuid) -> eyre::Result<()>;
}

/// Process-local store for tests and single-node development.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    tokens: Arc<RwLock<HashMap<Uuid, TokenRecord>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn save(&self, record: TokenRecord) -> eyre::Result<()> {
        self.tokens.write().await.insert(record.jti, record);
        Ok(())
    }

    async fn is_active(&self, jti: Uuid) -> eyre::Result<bool> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .get(&jti)
            .is_some_and(|record| record.expires_at > Utc::now()))
    }

    async fn revoke(&self, jti: Uuid) -> eyre::Result<()> {
        self.tokens.write().await.remove(&jti);
        Ok(())
    }
}
