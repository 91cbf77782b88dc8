//! Author identities referenced by a page of aggregates.

use std::collections::HashSet;

use crate::domain::UserId;

/// Collect each referenced author once, in first-seen order.
pub(crate) fn distinct_author_ids<'a, I>(author_ids: I) -> Vec<UserId>
where
    I: IntoIterator<Item = &'a UserId>,
{
    let mut seen: HashSet<&UserId> = HashSet::new();
    author_ids
        .into_iter()
        .filter(|author_id| seen.insert(*author_id))
        .cloned()
        .collect()
}
