//! Register a new user.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::Deserialize;
use tracing::debug;

use super::{UseCase, UserPayload, define_use_case_error};
use crate::domain::ports::UserRepository;
use crate::domain::{AggregateRoot, User, UserDraft};

define_use_case_error! {
    /// Business failures raised while registering a user.
    pub enum CreateUserErrorCode;

    /// Failure returned by [`CreateUserUseCase`].
    pub enum CreateUserError {
        /// A user with the minted identity is already stored.
        UserAlreadyCreated => "User already created",
    }
}

/// Request to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name of the new user.
    pub name: String,
}

/// The newly registered user.
pub type CreateUserResponse = UserPayload;

/// Mints a user and inserts it.
pub struct CreateUserUseCase<U> {
    user_repo: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U> CreateUserUseCase<U> {
    /// Wire the use case to its collaborators.
    #[must_use]
    pub const fn new(user_repo: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

#[async_trait]
impl<U> UseCase for CreateUserUseCase<U>
where
    U: UserRepository,
{
    type Request = CreateUserRequest;
    type Response = CreateUserResponse;
    type Error = CreateUserError;

    async fn execute(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, CreateUserError> {
        let user = User::create_new(UserDraft { name: request.name }, self.clock.as_ref());

        let saved = self
            .user_repo
            .save(&user)
            .await?
            .ok_or_else(CreateUserError::user_already_created)?;

        debug!(user_id = %saved.id(), "user created");
        Ok(UserPayload::from(saved))
    }
}

#[cfg(test)]
#[path = "create_user_tests.rs"]
mod tests;
