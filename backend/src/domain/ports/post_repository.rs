//! Port abstraction for post persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Page, Post, PostId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "post repository query failed: {message}",
    }
}

/// Storage contract for [`Post`] aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch a post by identity.
    async fn find_one_by_id(&self, id: &PostId) -> Result<Option<Post>, PostRepositoryError>;

    /// Fetch one window of all posts, newest first.
    ///
    /// Returns an empty list when [`Page::is_empty`] holds.
    async fn find_all(&self, page: Page) -> Result<Vec<Post>, PostRepositoryError>;

    /// Fetch every post written by `user_id`, newest first.
    async fn find_all_by_user_id(&self, user_id: &UserId)
    -> Result<Vec<Post>, PostRepositoryError>;

    /// Insert the post if its identity is unseen, otherwise overwrite it.
    ///
    /// `Ok(None)` reports that the store declined the write.
    async fn save(&self, post: &Post) -> Result<Option<Post>, PostRepositoryError>;

    /// Remove the post. Removing a post that is already gone is a no-op.
    async fn remove_one(&self, post: &Post) -> Result<(), PostRepositoryError>;
}

/// Fixture implementation for tests that do not exercise post persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePostRepository;

#[async_trait]
impl PostRepository for FixturePostRepository {
    async fn find_one_by_id(&self, _id: &PostId) -> Result<Option<Post>, PostRepositoryError> {
        Ok(None)
    }

    async fn find_all(&self, _page: Page) -> Result<Vec<Post>, PostRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_all_by_user_id(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, post: &Post) -> Result<Option<Post>, PostRepositoryError> {
        Ok(Some(post.clone()))
    }

    async fn remove_one(&self, _post: &Post) -> Result<(), PostRepositoryError> {
        Ok(())
    }
}
