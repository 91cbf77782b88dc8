//! Post aggregate.

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::{AggregateRoot, PostId, UserId};

/// Complete properties of a stored post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProps {
    /// Identity of the author.
    pub author_id: UserId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// When the post was first published.
    pub created_at: DateTime<Utc>,
}

/// Input for publishing a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Identity of the author.
    pub author_id: UserId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// A post written by a single author.
///
/// Updates never mutate a post; callers rebuild it with [`AggregateRoot::create`]
/// carrying over `created_at` from the stored value.
///
/// ## Invariants
/// - `author_id` refers to a user by identity only.
/// - `created_at` survives every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    author_id: UserId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Identity of the author.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Post body.
    #[must_use]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// When the post was first published.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl AggregateRoot for Post {
    type Id = PostId;
    type Props = PostProps;
    type Draft = PostDraft;

    fn create(props: PostProps, id: PostId) -> Self {
        let PostProps {
            author_id,
            title,
            content,
            created_at,
        } = props;
        Self {
            id,
            author_id,
            title,
            content,
            created_at,
        }
    }

    fn create_new(draft: PostDraft, clock: &dyn Clock) -> Self {
        let PostDraft {
            author_id,
            title,
            content,
        } = draft;
        Self::create(
            PostProps {
                author_id,
                title,
                content,
                created_at: clock.utc(),
            },
            PostId::random(),
        )
    }

    fn id(&self) -> &PostId {
        &self.id
    }
}
