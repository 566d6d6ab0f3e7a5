use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use taskboard_core::result::AppResult;
use taskboard_entity::token::{CreateRefreshToken, RefreshToken};

use crate::store::RefreshTokenStore;

/// Refresh tokens keyed by secret hash.
#[derive(Debug, Default)]
pub struct MemoryRefreshTokenStore {
    tokens: DashMap<String, RefreshToken>,
}

impl MemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens held for `user_id`.
    pub fn count_for_user(&self, user_id: Uuid) -> usize {
        self.tokens
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .count()
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryRefreshTokenStore {
    async fn create(&self, data: &CreateRefreshToken) -> AppResult<RefreshToken> {
        let token = RefreshToken {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            token_hash: data.token_hash.clone(),
            expires_at: data.expires_at,
            created_at: Utc::now(),
        };
        self.tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn take_by_hash(&self, token_hash: &str) -> AppResult<Option<RefreshToken>> {
        // DashMap::remove locks the shard, so only one caller gets the entry.
        Ok(self.tokens.remove(token_hash).map(|(_, token)| token))
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AppResult<bool> {
        Ok(self.tokens.remove(token_hash).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut removed = 0u64;
        self.tokens.retain(|_, token| {
            let live = token.expires_at >= now;
            if !live {
                removed += 1;
            }
            live
        });
        Ok(removed)
    }
}
