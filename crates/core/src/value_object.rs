//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are interchangeable. Measurements, discounts and
/// derived graph edges are the value objects of this domain; "modifying" one
/// means constructing a new one.
///
/// The bounds keep value objects cheap to copy around and easy to assert on
/// in tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
