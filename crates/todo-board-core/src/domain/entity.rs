//! Domain Layer - Core Entity Trait
//!
//! Records rendered by the board are identified by a server-assigned key.

/// Core trait for records that carry a unique identifier
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}
