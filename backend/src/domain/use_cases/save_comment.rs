//! Leave a new comment on a post or rewrite an existing one.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{UseCase, define_use_case_error};
use crate::domain::ports::{CommentRepository, PostRepository, UserRepository};
use crate::domain::{AggregateRoot, Comment, CommentDraft, CommentId, PostId, UserId};

define_use_case_error! {
    /// Business failures raised while saving a comment.
    pub enum SaveCommentErrorCode;

    /// Failure returned by [`SaveCommentUseCase`].
    pub enum SaveCommentError {
        /// The named author is not stored.
        AuthorNotFound => "Author not found",
        /// The post being commented on is not stored.
        PostNotFound => "Post not found",
        /// The comment to update is not stored.
        CommentNotFound => "Comment not found",
        /// The store declined to insert the new comment.
        CommentCreatingFailed => "Comment creating failed",
        /// The store declined to overwrite the comment.
        CommentUpdatingFailed => "Comment updating failed",
    }
}

/// Create-or-update request. Omitting `id` creates a comment.
///
/// On update only `content` is applied; the stored comment keeps its
/// author, post, and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCommentRequest {
    /// Comment to overwrite; `None` leaves a new one.
    #[serde(default)]
    pub id: Option<CommentId>,
    /// Post being commented on.
    pub post_id: PostId,
    /// Identity of the author.
    pub author_id: UserId,
    /// Comment body.
    pub content: String,
}

/// Identity of the saved comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCommentResponse {
    /// Identity of the stored comment.
    pub comment_id: CommentId,
}

/// Saves comments after checking both the author and the post exist.
pub struct SaveCommentUseCase<U, P, C> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<U, P, C> SaveCommentUseCase<U, P, C> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(
        user_repo: Arc<U>,
        post_repo: Arc<P>,
        comment_repo: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
            clock,
        }
    }
}

impl<U, P, C> SaveCommentUseCase<U, P, C>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
{
    async fn create(&self, draft: CommentDraft) -> Result<SaveCommentResponse, SaveCommentError> {
        let comment = Comment::create_new(draft, self.clock.as_ref());
        debug!(comment_id = %comment.id(), "creating comment");

        let saved = self
            .comment_repo
            .save(&comment)
            .await?
            .ok_or_else(SaveCommentError::comment_creating_failed)?;

        Ok(SaveCommentResponse {
            comment_id: saved.id().clone(),
        })
    }

    async fn update(
        &self,
        id: CommentId,
        content: String,
    ) -> Result<SaveCommentResponse, SaveCommentError> {
        let existing = self
            .comment_repo
            .find_one_by_id(&id)
            .await?
            .ok_or_else(SaveCommentError::comment_not_found)?;
        debug!(comment_id = %id, "updating comment");

        let comment = existing.with_content(content);
        let saved = self
            .comment_repo
            .save(&comment)
            .await?
            .ok_or_else(SaveCommentError::comment_updating_failed)?;

        Ok(SaveCommentResponse {
            comment_id: saved.id().clone(),
        })
    }
}

#[async_trait]
impl<U, P, C> UseCase for SaveCommentUseCase<U, P, C>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
{
    type Request = SaveCommentRequest;
    type Response = SaveCommentResponse;
    type Error = SaveCommentError;

    async fn execute(
        &self,
        request: SaveCommentRequest,
    ) -> Result<SaveCommentResponse, SaveCommentError> {
        let SaveCommentRequest {
            id,
            post_id,
            author_id,
            content,
        } = request;

        let author = self
            .user_repo
            .find_one_by_id(&author_id)
            .await?
            .ok_or_else(SaveCommentError::author_not_found)?;
        let post = self
            .post_repo
            .find_one_by_id(&post_id)
            .await?
            .ok_or_else(SaveCommentError::post_not_found)?;

        if let Some(comment_id) = id {
            return self.update(comment_id, content).await;
        }
        self.create(CommentDraft {
            author_id: author.id().clone(),
            post_id: post.id().clone(),
            content,
        })
        .await
    }
}

#[cfg(test)]
#[path = "save_comment_tests.rs"]
mod tests;
