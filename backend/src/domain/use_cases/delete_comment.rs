//! Remove a comment.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{UseCase, define_use_case_error};
use crate::domain::CommentId;
use crate::domain::ports::CommentRepository;

define_use_case_error! {
    /// Business failures raised while deleting a comment.
    pub enum DeleteCommentErrorCode;

    /// Failure returned by [`DeleteCommentUseCase`].
    pub enum DeleteCommentError {
        /// No comment has the requested identity.
        CommentNotFound => "Comment not found",
    }
}

/// Request to delete one comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentRequest {
    /// Comment to delete.
    pub comment_id: CommentId,
}

/// Deletes a comment that is known to exist.
pub struct DeleteCommentUseCase<C> {
    comment_repo: Arc<C>,
}

impl<C> DeleteCommentUseCase<C> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }
}

#[async_trait]
impl<C> UseCase for DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    type Request = DeleteCommentRequest;
    type Response = ();
    type Error = DeleteCommentError;

    async fn execute(&self, request: DeleteCommentRequest) -> Result<(), DeleteCommentError> {
        let comment = self
            .comment_repo
            .find_one_by_id(&request.comment_id)
            .await?
            .ok_or_else(DeleteCommentError::comment_not_found)?;

        self.comment_repo.remove_one(&comment).await?;
        debug!(comment_id = %request.comment_id, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockCommentRepository;
    use crate::domain::test_support::comment;

    fn request(id: &str) -> DeleteCommentRequest {
        DeleteCommentRequest {
            comment_id: CommentId::new(id),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn removes_existing_comment() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_find_one_by_id()
            .times(1)
            .return_once(|_| Ok(Some(comment("c-1", "p-1", "u-1", "hi", 0))));
        comments
            .expect_remove_one()
            .times(1)
            .withf(|comment| comment.content() == "hi")
            .return_once(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(comments));
        use_case
            .execute(request("c-1"))
            .await
            .expect("comment deleted");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_comment_is_not_removed() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_find_one_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        comments.expect_remove_one().times(0);

        let use_case = DeleteCommentUseCase::new(Arc::new(comments));
        let error = use_case
            .execute(request("missing"))
            .await
            .expect_err("missing comment");

        assert_eq!(error.code(), Some(DeleteCommentErrorCode::CommentNotFound));
    }
}
