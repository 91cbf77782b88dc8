//! In-memory comment store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{IdentityMap, newest_first};
use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{AggregateRoot, Comment, CommentId, Page, PostId, UserId};

/// Upserting comment store with newest-first listings.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<IdentityMap<Comment>>,
}

impl InMemoryCommentRepository {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching(&self, keep: impl Fn(&Comment) -> bool) -> Vec<Comment> {
        let matched: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|comment| keep(*comment))
            .cloned()
            .collect();
        newest_first(matched, Comment::created_at)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_one_by_id(
        &self,
        id: &CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let comments = self.comments.read().await;
        Ok(comments.get(id).cloned())
    }

    async fn find_all_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(self
            .matching(|comment| comment.author_id() == user_id)
            .await)
    }

    async fn find_all_by_post_id(
        &self,
        post_id: &PostId,
        page: Page,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        let on_post = self.matching(|comment| comment.post_id() == post_id).await;
        Ok(page.slice(on_post))
    }

    async fn save(&self, comment: &Comment) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut comments = self.comments.write().await;
        comments.upsert(comment.clone());
        debug!(comment_id = %comment.id(), "comment saved");
        Ok(Some(comment.clone()))
    }

    async fn remove_one(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        let mut comments = self.comments.write().await;
        let removed = comments.remove(comment.id());
        debug!(comment_id = %comment.id(), removed, "comment removal");
        Ok(())
    }
}
