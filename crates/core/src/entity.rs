//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog items and transaction lines implement this so generic code (stores,
/// report assembly) can key records without knowing the concrete type.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
