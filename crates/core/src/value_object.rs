//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A recorded price point or a purchase line has no identity of its own; two with the
/// same fields are the same value. Once recorded they are never modified, only
/// superseded by newer values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
