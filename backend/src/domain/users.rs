//! Batch lookup over a set of users.

use std::collections::HashMap;

use super::{AggregateRoot, User, UserId};

/// Users fetched in one pass, addressable by identity.
///
/// Built from a batch read such as
/// [`UserRepository::find_all_by_ids`](crate::domain::ports::UserRepository::find_all_by_ids)
/// and never persisted. Iteration follows the order the users were supplied
/// in; a user supplied twice is kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Users {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl Users {
    /// Build the lookup from an ordered list of users.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        users.into_iter().collect()
    }

    /// Look up a user by identity.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).and_then(|&position| self.users.get(position))
    }

    /// Whether a user with this identity is present.
    #[must_use]
    pub fn contains(&self, id: &UserId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of users held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over the users in their original order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }
}

impl FromIterator<User> for Users {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut users = Vec::new();
        let mut index = HashMap::new();
        for user in iter {
            if index.contains_key(user.id()) {
                continue;
            }
            index.insert(user.id().clone(), users.len());
            users.push(user);
        }
        Self { users, index }
    }
}

impl<'a> IntoIterator for &'a Users {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
