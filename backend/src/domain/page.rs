//! Skip/take window over an ordered listing.

use serde::{Deserialize, Serialize};

/// A listing window: skip `skip` items, then take up to `take`.
///
/// Values are kept exactly as requested. A window with a negative `skip` or
/// a non-positive `take` is empty, and repositories answer it with no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    skip: i64,
    take: i64,
}

impl Page {
    /// Build a window from raw query values.
    #[must_use]
    pub const fn new(skip: i64, take: i64) -> Self {
        Self { skip, take }
    }

    /// Number of items to skip.
    #[must_use]
    pub const fn skip(&self) -> i64 {
        self.skip
    }

    /// Maximum number of items to return.
    #[must_use]
    pub const fn take(&self) -> i64 {
        self.take
    }

    /// Whether this window can never yield an item.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.skip < 0 || self.take <= 0
    }

    /// Offset and length as `usize`, or `None` for an empty window.
    ///
    /// Values beyond `usize::MAX` saturate, which only ever over-reaches past
    /// the end of a listing.
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let take = usize::try_from(self.take).unwrap_or(usize::MAX);
        Some((skip, take))
    }

    /// Apply this window to an already ordered sequence.
    #[must_use]
    pub fn slice<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
    {
        self.bounds().map_or_else(Vec::new, |(skip, take)| {
            items.into_iter().skip(skip).take(take).collect()
        })
    }
}
