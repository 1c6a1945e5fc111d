//! # Dino Hunt Gameplay
//!
//! Frame-driven gameplay systems for Dino Hunt.
//!
//! This crate provides:
//! - Creature controller (random waypoint wander, idle pauses, damage)
//! - Creature roster that owns every creature in the scene
//! - Player attack controller (basic, meteor and fire attacks with cooldowns)
//! - Cover zones granting invulnerability to some creature kinds
//! - Collaborator traits for animation, audio, effects and spatial queries
//! - Input state and match state
//! - Event bus for combat notifications
//!
//! Nothing here owns a clock. The host calls `update(dt)` once per frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod animation;
pub mod attack;
pub mod audio;
pub mod creature;
pub mod effects;
pub mod events;
pub mod input;
pub mod match_state;
pub mod roster;
pub mod spatial;
pub mod zones;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::animation::*;
    pub use crate::attack::*;
    pub use crate::audio::*;
    pub use crate::creature::*;
    pub use crate::effects::*;
    pub use crate::events::*;
    pub use crate::input::*;
    pub use crate::match_state::*;
    pub use crate::roster::*;
    pub use crate::spatial::*;
    pub use crate::zones::*;
}

pub use prelude::*;
