//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier assigned by the registry, or `None` while the
    /// entity is not indexed.
    fn id(&self) -> Option<Self::Id>;

    /// Human-readable entity kind used in logs and error messages.
    fn kind() -> &'static str;
}
