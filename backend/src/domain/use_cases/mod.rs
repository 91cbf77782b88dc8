//! Application use cases.
//!
//! Each use case is a single linear pass over injected repositories: look
//! up what the request refers to, check it exists, persist or shape a
//! response. Failures are returned as that use case's own error type, never
//! recovered from locally and never retried.

use async_trait::async_trait;

mod macros;
pub(crate) use macros::define_use_case_error;

mod authors;
mod payloads;

mod create_user;
mod delete_comment;
mod delete_post;
mod get_post;
mod get_user;
mod list_comments_by_author_id;
mod list_comments_by_post_id;
mod list_posts;
mod list_posts_by_author_id;
mod save_comment;
mod save_post;

pub use self::create_user::{
    CreateUserError, CreateUserErrorCode, CreateUserRequest, CreateUserResponse,
    CreateUserUseCase,
};
pub use self::delete_comment::{
    DeleteCommentError, DeleteCommentErrorCode, DeleteCommentRequest, DeleteCommentUseCase,
};
pub use self::delete_post::{
    DeletePostError, DeletePostErrorCode, DeletePostRequest, DeletePostUseCase,
};
pub use self::get_post::{
    GetPostError, GetPostErrorCode, GetPostRequest, GetPostResponse, GetPostUseCase,
};
pub use self::get_user::{
    GetUserError, GetUserErrorCode, GetUserRequest, GetUserResponse, GetUserUseCase,
};
pub use self::list_comments_by_author_id::{
    ListCommentsByAuthorIdError, ListCommentsByAuthorIdErrorCode,
    ListCommentsByAuthorIdRequest, ListCommentsByAuthorIdUseCase,
};
pub use self::list_comments_by_post_id::{
    ListCommentsByPostIdError, ListCommentsByPostIdErrorCode, ListCommentsByPostIdRequest,
    ListCommentsByPostIdUseCase,
};
pub use self::list_posts::{ListPostsError, ListPostsErrorCode, ListPostsRequest, ListPostsUseCase};
pub use self::list_posts_by_author_id::{
    ListPostsByAuthorIdError, ListPostsByAuthorIdErrorCode, ListPostsByAuthorIdRequest,
    ListPostsByAuthorIdUseCase,
};
pub use self::payloads::{CommentPayload, PostPayload, PostSummary, UserPayload};
pub use self::save_comment::{
    SaveCommentError, SaveCommentErrorCode, SaveCommentRequest, SaveCommentResponse,
    SaveCommentUseCase,
};
pub use self::save_post::{
    SavePostError, SavePostErrorCode, SavePostRequest, SavePostResponse, SavePostUseCase,
};

/// A single application operation: one request in, one response or typed
/// error out.
///
/// Implementations hold no per-call state and may be executed concurrently.
#[async_trait]
pub trait UseCase: Send + Sync {
    /// Plain request structure accepted by [`UseCase::execute`].
    type Request: Send + 'static;
    /// Plain response structure produced on success.
    type Response: Send;
    /// Closed failure set for this operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run the operation once.
    async fn execute(&self, request: Self::Request) -> Result<Self::Response, Self::Error>;
}
