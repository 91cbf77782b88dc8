//! Opaque collaborator failures shared by every use-case error.
//!
//! Use-case errors carry a closed set of business codes. Anything a
//! repository raises that is not one of those codes surfaces as an
//! [`UnexpectedError`], which keeps the underlying port error as its source
//! so callers can log it without matching on adapter detail.

use thiserror::Error;

use super::ports::{CommentRepositoryError, PostRepositoryError, UserRepositoryError};

/// Failure originating outside the domain rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnexpectedError {
    /// User persistence failed.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
    /// Post persistence failed.
    #[error(transparent)]
    PostRepository(#[from] PostRepositoryError),
    /// Comment persistence failed.
    #[error(transparent)]
    CommentRepository(#[from] CommentRepositoryError),
}
