//! Comment aggregate.

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::{AggregateRoot, CommentId, PostId, UserId};

/// Complete properties of a stored comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentProps {
    /// Identity of the author.
    pub author_id: UserId,
    /// Identity of the commented post.
    pub post_id: PostId,
    /// Comment body.
    pub content: String,
    /// When the comment was first left.
    pub created_at: DateTime<Utc>,
}

/// Input for leaving a new comment on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    /// Identity of the author.
    pub author_id: UserId,
    /// Identity of the commented post.
    pub post_id: PostId,
    /// Comment body.
    pub content: String,
}

/// A comment left by a user on a post.
///
/// ## Invariants
/// - `content` is the only property that can change, and only through
///   [`Comment::with_content`], which yields a new value.
/// - `author_id` and `post_id` refer to other aggregates by identity only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    author_id: UserId,
    post_id: PostId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Identity of the author.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Identity of the post this comment belongs to.
    #[must_use]
    pub const fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Comment body.
    #[must_use]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// When the comment was first left.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rebuild this comment with replaced content.
    ///
    /// Identity, author, post, and creation time carry over unchanged.
    #[must_use]
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }
}

impl AggregateRoot for Comment {
    type Id = CommentId;
    type Props = CommentProps;
    type Draft = CommentDraft;

    fn create(props: CommentProps, id: CommentId) -> Self {
        let CommentProps {
            author_id,
            post_id,
            content,
            created_at,
        } = props;
        Self {
            id,
            author_id,
            post_id,
            content,
            created_at,
        }
    }

    fn create_new(draft: CommentDraft, clock: &dyn Clock) -> Self {
        let CommentDraft {
            author_id,
            post_id,
            content,
        } = draft;
        Self::create(
            CommentProps {
                author_id,
                post_id,
                content,
                created_at: clock.utc(),
            },
            CommentId::random(),
        )
    }

    fn id(&self) -> &CommentId {
        &self.id
    }
}
