//! One window of the comments on a post, newest first.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::authors::distinct_author_ids;
use super::{CommentPayload, UseCase, define_use_case_error};
use crate::domain::ports::{CommentRepository, PostRepository, UserRepository};
use crate::domain::{AggregateRoot, Comment, Page, PostId};

define_use_case_error! {
    /// Business failures raised while listing a post's comments.
    pub enum ListCommentsByPostIdErrorCode;

    /// Failure returned by [`ListCommentsByPostIdUseCase`].
    pub enum ListCommentsByPostIdError {
        /// No post has the requested identity.
        PostNotFound => "Post not found",
        /// A listed comment refers to an author that is not stored.
        AuthorNotFound => "Author not found",
    }
}

/// Request for one window of a post's comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsByPostIdRequest {
    /// Post whose comments are listed.
    pub post_id: PostId,
    /// Window over the comments, newest first.
    #[serde(flatten)]
    pub page: Page,
}

/// Lists a post's comments joined with their authors' names.
pub struct ListCommentsByPostIdUseCase<U, P, C> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<U, P, C> ListCommentsByPostIdUseCase<U, P, C> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>, post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
        }
    }
}

#[async_trait]
impl<U, P, C> UseCase for ListCommentsByPostIdUseCase<U, P, C>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
{
    type Request = ListCommentsByPostIdRequest;
    type Response = Vec<CommentPayload>;
    type Error = ListCommentsByPostIdError;

    async fn execute(
        &self,
        request: ListCommentsByPostIdRequest,
    ) -> Result<Vec<CommentPayload>, ListCommentsByPostIdError> {
        let ListCommentsByPostIdRequest { post_id, page } = request;

        self.post_repo
            .find_one_by_id(&post_id)
            .await?
            .ok_or_else(ListCommentsByPostIdError::post_not_found)?;

        let comments = self
            .comment_repo
            .find_all_by_post_id(&post_id, page)
            .await?;
        if comments.is_empty() {
            debug!(post_id = %post_id, "no comments in page");
            return Ok(Vec::new());
        }

        let author_ids = distinct_author_ids(comments.iter().map(Comment::author_id));
        let authors = self.user_repo.find_all_by_ids(&author_ids).await?;

        comments
            .iter()
            .map(|comment| {
                let Some(author) = authors.get(comment.author_id()) else {
                    warn!(
                        comment_id = %comment.id(),
                        author_id = %comment.author_id(),
                        "comment refers to a missing author"
                    );
                    return Err(ListCommentsByPostIdError::author_not_found());
                };
                Ok(CommentPayload::new(comment, author.name()))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "list_comments_by_post_id_tests.rs"]
mod tests;
