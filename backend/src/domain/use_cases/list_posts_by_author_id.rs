//! Every post written by one author.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{PostPayload, UseCase, define_use_case_error};
use crate::domain::UserId;
use crate::domain::ports::{PostRepository, UserRepository};

define_use_case_error! {
    /// Business failures raised while listing an author's posts.
    pub enum ListPostsByAuthorIdErrorCode;

    /// Failure returned by [`ListPostsByAuthorIdUseCase`].
    pub enum ListPostsByAuthorIdError {
        /// No user has the requested identity.
        AuthorNotFound => "Author not found",
    }
}

/// Request for one author's posts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsByAuthorIdRequest {
    /// Author whose posts are listed.
    pub user_id: UserId,
}

/// Lists an author's posts, reusing the one resolved author name for each.
pub struct ListPostsByAuthorIdUseCase<U, P> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> ListPostsByAuthorIdUseCase<U, P> {
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
impl<U, P> UseCase for ListPostsByAuthorIdUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    type Request = ListPostsByAuthorIdRequest;
    type Response = Vec<PostPayload>;
    type Error = ListPostsByAuthorIdError;

    async fn execute(
        &self,
        request: ListPostsByAuthorIdRequest,
    ) -> Result<Vec<PostPayload>, ListPostsByAuthorIdError> {
        let author = self
            .user_repo
            .find_one_by_id(&request.user_id)
            .await?
            .ok_or_else(ListPostsByAuthorIdError::author_not_found)?;

        let posts = self.post_repo.find_all_by_user_id(&request.user_id).await?;

        Ok(posts
            .iter()
            .map(|post| PostPayload::new(post, author.name()))
            .collect())
    }
}

#[cfg(test)]
#[path = "list_posts_by_author_id_tests.rs"]
mod tests;
