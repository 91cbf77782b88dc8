//! Publish a new post or rewrite an existing one.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{UseCase, define_use_case_error};
use crate::domain::ports::{PostRepository, UserRepository};
use crate::domain::{AggregateRoot, Post, PostDraft, PostId, PostProps, UserId};

define_use_case_error! {
    /// Business failures raised while saving a post.
    pub enum SavePostErrorCode;

    /// Failure returned by [`SavePostUseCase`].
    pub enum SavePostError {
        /// The named author is not stored.
        AuthorNotFound => "Author not found",
        /// The post to update is not stored.
        PostNotFound => "Post not found",
        /// The store declined to insert the new post.
        PostCreatingFailed => "Post creating failed",
        /// The store declined to overwrite the post.
        PostUpdatingFailed => "Post updating failed",
    }
}

/// Create-or-update request. Omitting `id` creates a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostRequest {
    /// Post to overwrite; `None` publishes a new one.
    #[serde(default)]
    pub id: Option<PostId>,
    /// Identity of the author.
    pub author_id: UserId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Identity of the saved post, on both the create and the update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostResponse {
    /// Identity of the stored post.
    pub post_id: PostId,
}

/// Saves posts after checking the author exists.
///
/// Updates rebuild the post from the request and keep the stored
/// `created_at`.
pub struct SavePostUseCase<U, P> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<U, P> SavePostUseCase<U, P> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>, post_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            post_repo,
            clock,
        }
    }
}

impl<U, P> SavePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    async fn create(&self, draft: PostDraft) -> Result<SavePostResponse, SavePostError> {
        let post = Post::create_new(draft, self.clock.as_ref());
        debug!(post_id = %post.id(), "creating post");

        let saved = self
            .post_repo
            .save(&post)
            .await?
            .ok_or_else(SavePostError::post_creating_failed)?;

        Ok(SavePostResponse {
            post_id: saved.id().clone(),
        })
    }

    async fn update(
        &self,
        id: PostId,
        draft: PostDraft,
    ) -> Result<SavePostResponse, SavePostError> {
        let existing = self
            .post_repo
            .find_one_by_id(&id)
            .await?
            .ok_or_else(SavePostError::post_not_found)?;
        debug!(post_id = %id, "updating post");

        let PostDraft {
            author_id,
            title,
            content,
        } = draft;
        let post = Post::create(
            PostProps {
                author_id,
                title,
                content,
                created_at: existing.created_at(),
            },
            id,
        );

        let saved = self
            .post_repo
            .save(&post)
            .await?
            .ok_or_else(SavePostError::post_updating_failed)?;

        Ok(SavePostResponse {
            post_id: saved.id().clone(),
        })
    }
}

#[async_trait]
impl<U, P> UseCase for SavePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    type Request = SavePostRequest;
    type Response = SavePostResponse;
    type Error = SavePostError;

    async fn execute(&self, request: SavePostRequest) -> Result<SavePostResponse, SavePostError> {
        let SavePostRequest {
            id,
            author_id,
            title,
            content,
        } = request;

        let author = self
            .user_repo
            .find_one_by_id(&author_id)
            .await?
            .ok_or_else(SavePostError::author_not_found)?;

        let draft = PostDraft {
            author_id: author.id().clone(),
            title,
            content,
        };
        if let Some(post_id) = id {
            return self.update(post_id, draft).await;
        }
        self.create(draft).await
    }
}

#[cfg(test)]
#[path = "save_post_tests.rs"]
mod tests;
