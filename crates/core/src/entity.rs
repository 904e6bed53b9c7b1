//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and shopping lists keep their identity while stock, demand and items
/// change underneath them.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
