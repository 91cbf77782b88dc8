//! Read one post together with its author.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{PostPayload, UseCase, define_use_case_error};
use crate::domain::PostId;
use crate::domain::ports::{PostRepository, UserRepository};

define_use_case_error! {
    /// Business failures raised while reading a post.
    pub enum GetPostErrorCode;

    /// Failure returned by [`GetPostUseCase`].
    pub enum GetPostError {
        /// No post has the requested identity.
        PostNotFound => "Post not found",
        /// The post's author is not stored.
        AuthorNotFound => "Author not found",
    }
}

/// Request for one post by identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostRequest {
    /// Identity to look up.
    pub id: PostId,
}

/// The post joined with its author's name.
pub type GetPostResponse = PostPayload;

/// Loads a post and resolves its author.
pub struct GetPostUseCase<U, P> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> GetPostUseCase<U, P> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>, post_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }
}

#[async_trait]
impl<U, P> UseCase for GetPostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    type Request = GetPostRequest;
    type Response = GetPostResponse;
    type Error = GetPostError;

    async fn execute(&self, request: GetPostRequest) -> Result<GetPostResponse, GetPostError> {
        let post = self
            .post_repo
            .find_one_by_id(&request.id)
            .await?
            .ok_or_else(GetPostError::post_not_found)?;

        let author = self
            .user_repo
            .find_one_by_id(post.author_id())
            .await?
            .ok_or_else(GetPostError::author_not_found)?;

        Ok(PostPayload::new(&post, author.name()))
    }
}

#[cfg(test)]
#[path = "get_post_tests.rs"]
mod tests;
