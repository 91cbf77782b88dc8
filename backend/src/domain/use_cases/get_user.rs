//! Look up a single user.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{UseCase, UserPayload, define_use_case_error};
use crate::domain::UserId;
use crate::domain::ports::UserRepository;

define_use_case_error! {
    /// Business failures raised while looking up a user.
    pub enum GetUserErrorCode;

    /// Failure returned by [`GetUserUseCase`].
    pub enum GetUserError {
        /// No user has the requested identity.
        UserNotFound => "User not found",
    }
}

/// Request for one user by identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserRequest {
    /// Identity to look up.
    pub id: UserId,
}

/// The requested user.
pub type GetUserResponse = UserPayload;

/// Reads a user's public fields.
pub struct GetUserUseCase<U> {
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UseCase for GetUserUseCase<U>
where
    U: UserRepository,
{
    type Request = GetUserRequest;
    type Response = GetUserResponse;
    type Error = GetUserError;

    async fn execute(&self, request: GetUserRequest) -> Result<GetUserResponse, GetUserError> {
        let user = self
            .user_repo
            .find_one_by_id(&request.id)
            .await?
            .ok_or_else(GetUserError::user_not_found)?;

        Ok(UserPayload::from(user))
    }
}

#[cfg(test)]
#[path = "get_user_tests.rs"]
mod tests;
