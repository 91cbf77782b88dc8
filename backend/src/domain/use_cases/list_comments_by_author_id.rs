//! Every comment written by one author.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{CommentPayload, UseCase, define_use_case_error};
use crate::domain::UserId;
use crate::domain::ports::{CommentRepository, UserRepository};

define_use_case_error! {
    /// Business failures raised while listing an author's comments.
    pub enum ListCommentsByAuthorIdErrorCode;

    /// Failure returned by [`ListCommentsByAuthorIdUseCase`].
    pub enum ListCommentsByAuthorIdError {
        /// No user has the requested identity.
        AuthorNotFound => "Author not found",
    }
}

/// Request for one author's comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsByAuthorIdRequest {
    /// Author whose comments are listed.
    pub user_id: UserId,
}

/// Lists an author's comments, newest first.
pub struct ListCommentsByAuthorIdUseCase<U, C> {
    user_repo: Arc<U>,
    comment_repo: Arc<C>,
}

impl<U, C> ListCommentsByAuthorIdUseCase<U, C> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>, comment_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            comment_repo,
        }
    }
}

#[async_trait]
impl<U, C> UseCase for ListCommentsByAuthorIdUseCase<U, C>
where
    U: UserRepository,
    C: CommentRepository,
{
    type Request = ListCommentsByAuthorIdRequest;
    type Response = Vec<CommentPayload>;
    type Error = ListCommentsByAuthorIdError;

    async fn execute(
        &self,
        request: ListCommentsByAuthorIdRequest,
    ) -> Result<Vec<CommentPayload>, ListCommentsByAuthorIdError> {
        let author = self
            .user_repo
            .find_one_by_id(&request.user_id)
            .await?
            .ok_or_else(ListCommentsByAuthorIdError::author_not_found)?;

        let comments = self
            .comment_repo
            .find_all_by_user_id(&request.user_id)
            .await?;

        Ok(comments
            .iter()
            .map(|comment| CommentPayload::new(comment, author.name()))
            .collect())
    }
}

#[cfg(test)]
#[path = "list_comments_by_author_id_tests.rs"]
mod tests;
