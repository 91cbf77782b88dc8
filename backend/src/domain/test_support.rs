//! Shared fixtures for domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use super::{
    AggregateRoot, Comment, CommentId, CommentProps, Post, PostId, PostProps, User, UserId,
    UserProps,
};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock pinned to a single instant.
pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    pub(crate) const fn at(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock::at(fixture_timestamp()))
}

pub(crate) fn user(id: &str, name: &str) -> User {
    User::create(
        UserProps {
            name: name.to_owned(),
            registered_at: fixture_timestamp(),
        },
        UserId::new(id),
    )
}

/// Post created `minutes_ago` minutes before the fixture timestamp.
pub(crate) fn post(id: &str, author_id: &str, title: &str, minutes_ago: i64) -> Post {
    Post::create(
        PostProps {
            author_id: UserId::new(author_id),
            title: title.to_owned(),
            content: format!("{title} body"),
            created_at: fixture_timestamp() - Duration::minutes(minutes_ago),
        },
        PostId::new(id),
    )
}

/// Comment created `minutes_ago` minutes before the fixture timestamp.
pub(crate) fn comment(
    id: &str,
    post_id: &str,
    author_id: &str,
    content: &str,
    minutes_ago: i64,
) -> Comment {
    Comment::create(
        CommentProps {
            author_id: UserId::new(author_id),
            post_id: PostId::new(post_id),
            content: content.to_owned(),
            created_at: fixture_timestamp() - Duration::minutes(minutes_ago),
        },
        CommentId::new(id),
    )
}
