//! Domain primitives, aggregates, ports, and use cases.
//!
//! Purpose: Define the board's aggregates (users, posts, comments), the
//! repository contracts they are persisted through, and the use cases that
//! orchestrate them. Aggregates refer to each other only by identity;
//! cross-aggregate lookups are explicit repository calls.
//!
//! Public surface:
//! - UserId, PostId, CommentId — opaque string identities.
//! - User, Post, Comment — aggregates built via [`AggregateRoot`] factories.
//! - Users — batch lookup helper for resolving many authors at once.
//! - Page — skip/take window for listings.
//! - UnexpectedError — opaque collaborator failure carried by every use-case
//!   error.

pub mod aggregate;
pub mod comment;
pub mod error;
pub mod id;
pub mod page;
pub mod ports;
pub mod post;
pub mod use_cases;
pub mod user;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::aggregate::AggregateRoot;
pub use self::comment::{Comment, CommentDraft, CommentProps};
pub use self::error::UnexpectedError;
pub use self::id::{CommentId, PostId, UserId};
pub use self::page::Page;
pub use self::post::{Post, PostDraft, PostProps};
pub use self::user::{User, UserDraft, UserProps};
pub use self::users::Users;
