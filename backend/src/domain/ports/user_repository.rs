//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId, Users};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Storage contract for [`User`] aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identity.
    async fn find_one_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch every user whose identity appears in `ids`.
    ///
    /// Unknown identities are skipped, so the result may hold fewer users
    /// than distinct ids were requested.
    async fn find_all_by_ids(&self, ids: &[UserId]) -> Result<Users, UserRepositoryError>;

    /// Insert a user.
    ///
    /// Insert-only: returns `Ok(None)` when a user with the same identity is
    /// already stored, leaving the stored user untouched.
    async fn save(&self, user: &User) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise user persistence.
///
/// Knows no users and accepts every insert.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_one_by_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn find_all_by_ids(&self, _ids: &[UserId]) -> Result<Users, UserRepositoryError> {
        Ok(Users::default())
    }

    async fn save(&self, user: &User) -> Result<Option<User>, UserRepositoryError> {
        Ok(Some(user.clone()))
    }
}
