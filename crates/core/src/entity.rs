//! Entity trait: identity + continuity across state changes.

use crate::id::Id;

/// Entity marker + minimal interface.
///
/// An entity's identifier is assigned at construction and never changes;
/// everything else about it may.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> Id;
}
