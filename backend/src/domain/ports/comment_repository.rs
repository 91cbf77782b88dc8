//! Port abstraction for comment persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, Page, PostId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "comment repository query failed: {message}",
    }
}

/// Storage contract for [`Comment`] aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch a comment by identity.
    async fn find_one_by_id(&self, id: &CommentId)
    -> Result<Option<Comment>, CommentRepositoryError>;

    /// Fetch every comment written by `user_id`, newest first.
    async fn find_all_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Fetch one window of the comments on `post_id`, newest first.
    ///
    /// Returns an empty list when [`Page::is_empty`] holds.
    async fn find_all_by_post_id(
        &self,
        post_id: &PostId,
        page: Page,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Insert the comment if its identity is unseen, otherwise overwrite it.
    ///
    /// `Ok(None)` reports that the store declined the write.
    async fn save(&self, comment: &Comment) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Remove the comment. Removing a comment that is already gone is a no-op.
    async fn remove_one(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;
}

/// Fixture implementation for tests that do not exercise comment persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommentRepository;

#[async_trait]
impl CommentRepository for FixtureCommentRepository {
    async fn find_one_by_id(
        &self,
        _id: &CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(None)
    }

    async fn find_all_by_user_id(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_all_by_post_id(
        &self,
        _post_id: &PostId,
        _page: Page,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, comment: &Comment) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(Some(comment.clone()))
    }

    async fn remove_one(&self, _comment: &Comment) -> Result<(), CommentRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_lookups_are_empty() {
        let repo = FixtureCommentRepository;

        let found = repo
            .find_one_by_id(&CommentId::random())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());

        let by_post = repo
            .find_all_by_post_id(&PostId::random(), Page::new(0, 10))
            .await
            .expect("fixture list succeeds");
        assert!(by_post.is_empty());
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = CommentRepositoryError::connection("refused");
        assert_eq!(
            err.to_string(),
            "comment repository connection failed: refused"
        );
    }
}
