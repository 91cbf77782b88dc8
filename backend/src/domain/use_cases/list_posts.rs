//! Index of posts, newest first.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::authors::distinct_author_ids;
use super::{PostSummary, UseCase, define_use_case_error};
use crate::domain::ports::{PostRepository, UserRepository};
use crate::domain::{AggregateRoot, Page, Post};

define_use_case_error! {
    /// Business failures raised while listing posts.
    pub enum ListPostsErrorCode;

    /// Failure returned by [`ListPostsUseCase`].
    pub enum ListPostsError {
        /// A listed post refers to an author that is not stored.
        AuthorNotFound => "Author not found",
    }
}

/// Request for one window of the post index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListPostsRequest {
    /// Window over the post index, newest first.
    #[serde(flatten)]
    pub page: Page,
}

/// Lists posts joined with their authors' names.
///
/// A post whose author is missing fails the whole listing; the index never
/// returns a partial page.
pub struct ListPostsUseCase<U, P> {
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> ListPostsUseCase<U, P> {
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
impl<U, P> UseCase for ListPostsUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    type Request = ListPostsRequest;
    type Response = Vec<PostSummary>;
    type Error = ListPostsError;

    async fn execute(
        &self,
        request: ListPostsRequest,
    ) -> Result<Vec<PostSummary>, ListPostsError> {
        let posts = self.post_repo.find_all(request.page).await?;
        if posts.is_empty() {
            debug!(
                skip = request.page.skip(),
                take = request.page.take(),
                "no posts in page"
            );
            return Ok(Vec::new());
        }

        let author_ids = distinct_author_ids(posts.iter().map(Post::author_id));
        let authors = self.user_repo.find_all_by_ids(&author_ids).await?;

        posts
            .iter()
            .map(|post| {
                let Some(author) = authors.get(post.author_id()) else {
                    warn!(
                        post_id = %post.id(),
                        author_id = %post.author_id(),
                        "post refers to a missing author"
                    );
                    return Err(ListPostsError::author_not_found());
                };
                Ok(PostSummary::new(post, author.name()))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "list_posts_tests.rs"]
mod tests;
