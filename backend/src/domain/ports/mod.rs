//! Repository ports for the hexagonal boundary.
//!
//! The use cases depend on these traits only; a persistence collaborator
//! supplies the implementations. The in-memory adapters under
//! [`crate::outbound::memory`] are one such collaborator.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_repository;
mod post_repository;
mod user_repository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{
    CommentRepository, CommentRepositoryError, FixtureCommentRepository,
};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{FixturePostRepository, PostRepository, PostRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
