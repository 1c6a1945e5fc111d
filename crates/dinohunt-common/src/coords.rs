//! World-space helpers for the 2D hunting ground.
//!
//! Gameplay runs in a flat XY plane. The Z component of a [`Vec3`] is a
//! render depth only and never takes part in movement or queries.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Depth at which attack effects are spawned, in front of every creature.
pub const EFFECT_DEPTH: f32 = -6.0;

/// Axis-aligned rectangle centered on the origin.
///
/// Creatures pick their wander destinations inside these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Half width (x) and half height (y)
    pub half_extents: Vec2,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(8.0, 4.0)
    }
}

impl WorldBounds {
    /// Creates bounds spanning `[-half_x, half_x] × [-half_y, half_y]`.
    #[must_use]
    pub const fn new(half_x: f32, half_y: f32) -> Self {
        Self {
            half_extents: Vec2::new(half_x, half_y),
        }
    }

    /// Checks if a point lies inside the bounds (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extents.x && point.y.abs() <= self.half_extents.y
    }

    /// Picks a uniformly distributed point inside the bounds.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec2 {
        Vec2::new(
            symmetric(rng, self.half_extents.x),
            symmetric(rng, self.half_extents.y),
        )
    }
}

/// Uniform value in `[-half, half)`.
fn symmetric(rng: &mut fastrand::Rng, half: f32) -> f32 {
    (rng.f32() * 2.0 - 1.0) * half
}

/// Places a planar point at the given depth.
#[must_use]
pub fn at_depth(point: Vec2, depth: f32) -> Vec3 {
    point.extend(depth)
}
