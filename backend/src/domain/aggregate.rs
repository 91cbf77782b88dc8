//! Shared shape of the board's aggregates.

use std::fmt::Debug;
use std::hash::Hash;

use mockable::Clock;

/// An identity plus an immutable property bag.
///
/// Aggregates are only built through the two factories below. Neither
/// factory fails: properties are taken as given, and the only derived values
/// (identity and creation timestamp) are minted by `create_new`.
pub trait AggregateRoot: Sized {
    /// Strongly-typed identity.
    type Id: Clone + Eq + Hash + Debug;

    /// Complete properties, as loaded from storage or carried over from an
    /// existing aggregate.
    type Props;

    /// Caller-supplied properties for a brand-new aggregate.
    type Draft;

    /// Reconstitute an aggregate whose identity and properties are known.
    fn create(props: Self::Props, id: Self::Id) -> Self;

    /// Originate a new aggregate, minting its identity and stamping its
    /// creation time from `clock`.
    fn create_new(draft: Self::Draft, clock: &dyn Clock) -> Self;

    /// The aggregate's identity.
    fn id(&self) -> &Self::Id;
}
