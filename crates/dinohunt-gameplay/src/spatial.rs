//! Spatial queries over tagged circle colliders.
//!
//! [`SpatialQuery`] is what attacks consume. [`SpatialIndex`] is the
//! in-process implementation the host refreshes from creature positions
//! every frame.

use dinohunt_common::EntityId;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification tag carried by every collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderTag {
    /// A creature that can take damage
    Creature,
    /// Scenery that blocks clicks but takes no damage
    Scenery,
}

/// A single query hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Owner of the collider
    pub entity: EntityId,
    /// Tag of the collider
    pub tag: ColliderTag,
    /// Distance from the query origin to the collider center
    pub distance: f32,
}

impl Hit {
    /// Checks if the hit landed on a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.tag == ColliderTag::Creature
    }
}

/// Spatial query interface used by player attacks.
pub trait SpatialQuery {
    /// Returns the nearest collider containing `origin`.
    fn point_query(&self, origin: Vec2) -> Option<Hit>;

    /// Returns every collider overlapping the circle, nearest first.
    fn area_query(&self, origin: Vec2, radius: f32) -> Vec<Hit>;
}

/// Circle collider stored in a [`SpatialIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Center in world space
    pub center: Vec2,
    /// Radius in world units
    pub radius: f32,
    /// Classification tag
    pub tag: ColliderTag,
}

/// Flat collection of circle colliders keyed by owner.
///
/// Scenes hold a handful of creatures, so queries scan every collider.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    colliders: BTreeMap<EntityId, Collider>,
}

impl SpatialIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or moves a collider.
    pub fn upsert(&mut self, entity: EntityId, collider: Collider) {
        self.colliders.insert(entity, collider);
    }

    /// Removes a collider. Returns it if it was present.
    pub fn remove(&mut self, entity: EntityId) -> Option<Collider> {
        self.colliders.remove(&entity)
    }

    /// Keeps only the colliders whose owner passes the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(EntityId) -> bool) {
        self.colliders.retain(|id, _| keep(*id));
    }

    /// Gets a collider by owner.
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&Collider> {
        self.colliders.get(&entity)
    }

    /// Number of colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Checks if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    fn hits_within(&self, origin: Vec2, extra_radius: f32) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .colliders
            .iter()
            .filter_map(|(&entity, collider)| {
                let distance = origin.distance(collider.center);
                (distance <= collider.radius + extra_radius).then_some(Hit {
                    entity,
                    tag: collider.tag,
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl SpatialQuery for SpatialIndex {
    fn point_query(&self, origin: Vec2) -> Option<Hit> {
        self.hits_within(origin, 0.0).into_iter().next()
    }

    fn area_query(&self, origin: Vec2, radius: f32) -> Vec<Hit> {
        self.hits_within(origin, radius.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature_at(x: f32, y: f32) -> Collider {
        Collider {
            center: Vec2::new(x, y),
            radius: 0.5,
            tag: ColliderTag::Creature,
        }
    }

    #[test]
    fn test_point_query_picks_nearest() {
        let mut index = SpatialIndex::new();
        let far = EntityId::new();
        let near = EntityId::new();
        index.upsert(far, creature_at(0.4, 0.0));
        index.upsert(near, creature_at(0.1, 0.0));

        let hit = index.point_query(Vec2::ZERO).expect("both contain origin");
        assert_eq!(hit.entity, near);
        assert!(hit.is_creature());
    }

    #[test]
    fn test_point_query_miss() {
        let mut index = SpatialIndex::new();
        index.upsert(EntityId::new(), creature_at(3.0, 3.0));
        assert!(index.point_query(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_area_query_includes_edge_overlap() {
        let mut index = SpatialIndex::new();
        let inside = EntityId::new();
        let touching = EntityId::new();
        let outside = EntityId::new();
        index.upsert(inside, creature_at(0.5, 0.0));
        index.upsert(touching, creature_at(2.0, 0.0));
        index.upsert(outside, creature_at(5.0, 0.0));

        let hits = index.area_query(Vec2::ZERO, 1.5);
        let ids: Vec<EntityId> = hits.iter().map(|h| h.entity).collect();
        assert_eq!(ids, vec![inside, touching]);
    }

    #[test]
    fn test_scenery_is_reported_but_tagged() {
        let mut index = SpatialIndex::new();
        let rock = EntityId::new();
        index.upsert(
            rock,
            Collider {
                center: Vec2::ZERO,
                radius: 1.0,
                tag: ColliderTag::Scenery,
            },
        );
        let hit = index.point_query(Vec2::new(0.2, 0.2)).expect("inside rock");
        assert_eq!(hit.entity, rock);
        assert!(!hit.is_creature());
    }

    #[test]
    fn test_remove_and_retain() {
        let mut index = SpatialIndex::new();
        let a = EntityId::new();
        let b = EntityId::new();
        index.upsert(a, creature_at(0.0, 0.0));
        index.upsert(b, creature_at(1.0, 0.0));

        assert!(index.remove(a).is_some());
        index.retain(|id| id != b);
        assert!(index.is_empty());
    }
}
