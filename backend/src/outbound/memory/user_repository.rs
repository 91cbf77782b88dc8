//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::IdentityMap;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{AggregateRoot, User, UserId, Users};

/// Insert-only user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<IdentityMap<User>>,
}

impl InMemoryUserRepository {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_one_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[UserId]) -> Result<Users, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| users.get(id).cloned())
            .collect())
    }

    async fn save(&self, user: &User) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.users.write().await;
        if !users.insert(user.clone()) {
            debug!(user_id = %user.id(), "user already stored; insert skipped");
            return Ok(None);
        }
        debug!(user_id = %user.id(), "user inserted");
        Ok(Some(user.clone()))
    }
}
