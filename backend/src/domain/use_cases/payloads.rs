//! Response records shared by several use cases.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AggregateRoot, Comment, CommentId, Post, PostId, User, UserId};

/// Public fields of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// User identity.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// When the user registered.
    pub registered_at: DateTime<Utc>,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id().clone(),
            name: user.name().to_owned(),
            registered_at: user.registered_at(),
        }
    }
}

/// A post joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    /// Post identity.
    pub id: PostId,
    /// Identity of the author.
    pub author_id: UserId,
    /// Display name of the author.
    pub author_name: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// When the post was first published.
    pub created_at: DateTime<Utc>,
}

impl PostPayload {
    /// Join `post` with the name of its already resolved author.
    #[must_use]
    pub fn new(post: &Post, author_name: impl Into<String>) -> Self {
        Self {
            id: post.id().clone(),
            author_id: post.author_id().clone(),
            author_name: author_name.into(),
            title: post.title().to_owned(),
            content: post.content().to_owned(),
            created_at: post.created_at(),
        }
    }
}

/// Listing row for the post index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Post identity.
    pub id: PostId,
    /// Display name of the author.
    pub author_name: String,
    /// Post title.
    pub title: String,
    /// When the post was first published.
    pub created_at: DateTime<Utc>,
}

impl PostSummary {
    /// Summarise `post` under the name of its already resolved author.
    #[must_use]
    pub fn new(post: &Post, author_name: impl Into<String>) -> Self {
        Self {
            id: post.id().clone(),
            author_name: author_name.into(),
            title: post.title().to_owned(),
            created_at: post.created_at(),
        }
    }
}

/// A comment joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    /// Comment identity.
    pub id: CommentId,
    /// Identity of the commented post.
    pub post_id: PostId,
    /// Identity of the author.
    pub author_id: UserId,
    /// Display name of the author.
    pub author_name: String,
    /// Comment body.
    pub content: String,
    /// When the comment was first left.
    pub created_at: DateTime<Utc>,
}

impl CommentPayload {
    /// Join `comment` with the name of its already resolved author.
    #[must_use]
    pub fn new(comment: &Comment, author_name: impl Into<String>) -> Self {
        Self {
            id: comment.id().clone(),
            post_id: comment.post_id().clone(),
            author_id: comment.author_id().clone(),
            author_name: author_name.into(),
            content: comment.content().to_owned(),
            created_at: comment.created_at(),
        }
    }
}
