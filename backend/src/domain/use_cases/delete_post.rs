//! Remove a post.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{UseCase, define_use_case_error};
use crate::domain::PostId;
use crate::domain::ports::PostRepository;

define_use_case_error! {
    /// Business failures raised while deleting a post.
    pub enum DeletePostErrorCode;

    /// Failure returned by [`DeletePostUseCase`].
    pub enum DeletePostError {
        /// No post has the requested identity.
        PostNotFound => "Post not found",
    }
}

/// Request to delete one post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    /// Post to delete.
    pub post_id: PostId,
}

/// Deletes a post that is known to exist.
pub struct DeletePostUseCase<P> {
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
impl<P> UseCase for DeletePostUseCase<P>
where
    P: PostRepository,
{
    type Request = DeletePostRequest;
    type Response = ();
    type Error = DeletePostError;

    async fn execute(&self, request: DeletePostRequest) -> Result<(), DeletePostError> {
        let post = self
            .post_repo
            .find_one_by_id(&request.post_id)
            .await?
            .ok_or_else(DeletePostError::post_not_found)?;

        self.post_repo.remove_one(&post).await?;
        debug!(post_id = %request.post_id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "delete_post_tests.rs"]
mod tests;
