//! In-memory repositories.
//!
//! Each store is an [`IdentityMap`] guarded by a `tokio::sync::RwLock`:
//! point lookups go through a hash index on identity, and iteration follows
//! insertion order. Listings sort a snapshot newest first with a stable
//! sort, so aggregates created at the same instant keep insertion order.

mod comment_repository;
mod post_repository;
mod user_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use post_repository::InMemoryPostRepository;
pub use user_repository::InMemoryUserRepository;

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::domain::AggregateRoot;

/// Aggregates keyed by identity, iterated in insertion order.
///
/// Overwriting an aggregate keeps its original position.
#[derive(Debug)]
struct IdentityMap<T: AggregateRoot> {
    by_id: HashMap<T::Id, u64>,
    by_arrival: BTreeMap<u64, T>,
    next_arrival: u64,
}

impl<T: AggregateRoot> Default for IdentityMap<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            by_arrival: BTreeMap::new(),
            next_arrival: 0,
        }
    }
}

impl<T: AggregateRoot> IdentityMap<T> {
    fn get(&self, id: &T::Id) -> Option<&T> {
        self.by_id
            .get(id)
            .and_then(|arrival| self.by_arrival.get(arrival))
    }

    /// Store `item` unless its identity is taken. Returns whether it was stored.
    fn insert(&mut self, item: T) -> bool {
        if self.by_id.contains_key(item.id()) {
            return false;
        }
        self.append(item);
        true
    }

    /// Replace the aggregate with the same identity, or append `item`.
    fn upsert(&mut self, item: T) {
        if let Some(&arrival) = self.by_id.get(item.id()) {
            self.by_arrival.insert(arrival, item);
            return;
        }
        self.append(item);
    }

    /// Returns whether an aggregate was removed.
    fn remove(&mut self, id: &T::Id) -> bool {
        self.by_id
            .remove(id)
            .and_then(|arrival| self.by_arrival.remove(&arrival))
            .is_some()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_arrival.values()
    }

    fn append(&mut self, item: T) {
        let arrival = self.next_arrival;
        self.next_arrival += 1;
        self.by_id.insert(item.id().clone(), arrival);
        self.by_arrival.insert(arrival, item);
    }
}

/// Sort `items` by creation time, newest first, keeping ties in order.
fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    items.sort_by_key(|item| Reverse(created_at(item)));
    items
}
