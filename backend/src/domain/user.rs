//! User aggregate.

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::{AggregateRoot, UserId};

/// Complete properties of a stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProps {
    /// Display name.
    pub name: String,
    /// When the user registered.
    pub registered_at: DateTime<Utc>,
}

/// Input for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
}

/// A registered author.
///
/// ## Invariants
/// - `registered_at` is set once, when the user is created, and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    registered_at: DateTime<Utc>,
}

impl User {
    /// Display name of the user.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// When the user registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl AggregateRoot for User {
    type Id = UserId;
    type Props = UserProps;
    type Draft = UserDraft;

    fn create(props: UserProps, id: UserId) -> Self {
        let UserProps {
            name,
            registered_at,
        } = props;
        Self {
            id,
            name,
            registered_at,
        }
    }

    fn create_new(draft: UserDraft, clock: &dyn Clock) -> Self {
        Self::create(
            UserProps {
                name: draft.name,
                registered_at: clock.utc(),
            },
            UserId::random(),
        )
    }

    fn id(&self) -> &UserId {
        &self.id
    }
}
