//! # Dino Hunt Common
//!
//! Common types shared by the Dino Hunt crates:
//! - Entity ids
//! - World-space bounds and depth constants
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_generation() {
        let id1 = EntityId::new();
        let id2 = EntityId::new();
        assert_ne!(id1, id2);
        assert!(id1.is_valid());
        assert!(!EntityId::NULL.is_valid());
    }

    #[test]
    fn test_default_bounds_match_ground() {
        let bounds = WorldBounds::default();
        assert_eq!(bounds.half_extents, glam::Vec2::new(8.0, 4.0));
        assert!(bounds.contains(glam::Vec2::new(-7.9, 3.9)));
        assert!(!bounds.contains(glam::Vec2::new(8.5, 0.0)));
    }
}
