//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{IdentityMap, newest_first};
use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{AggregateRoot, Page, Post, PostId, UserId};

/// Upserting post store with newest-first listings.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<IdentityMap<Post>>,
}

impl InMemoryPostRepository {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_one_by_id(&self, id: &PostId) -> Result<Option<Post>, PostRepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Post>, PostRepositoryError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        let snapshot: Vec<Post> = self.posts.read().await.iter().cloned().collect();
        Ok(page.slice(newest_first(snapshot, Post::created_at)))
    }

    async fn find_all_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        let authored: Vec<Post> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| post.author_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(authored, Post::created_at))
    }

    async fn save(&self, post: &Post) -> Result<Option<Post>, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        posts.upsert(post.clone());
        debug!(post_id = %post.id(), "post saved");
        Ok(Some(post.clone()))
    }

    async fn remove_one(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let removed = posts.remove(post.id());
        debug!(post_id = %post.id(), removed, "post removal");
        Ok(())
    }
}
