//! Cover zones and overlap detection.
//!
//! A cover zone is a circular trigger area. [`CoverZones::detect`] compares
//! the current creature positions against the previous frame and reports
//! enter/exit transitions, which the roster forwards to creatures.

use dinohunt_common::EntityId;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::trace;

/// Kind of cover a zone provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneTag {
    /// Low bushes, small creatures hide in them
    Bush,
    /// Tree canopy, hides medium and small creatures
    Tree,
}

/// Circular cover zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverZone {
    /// Zone identity
    pub id: EntityId,
    /// Cover kind
    pub tag: ZoneTag,
    /// Center in world space
    pub center: Vec2,
    /// Radius in world units
    pub radius: f32,
}

impl CoverZone {
    /// Creates a zone with a fresh id.
    #[must_use]
    pub fn new(tag: ZoneTag, center: Vec2, radius: f32) -> Self {
        Self {
            id: EntityId::new(),
            tag,
            center,
            radius,
        }
    }

    /// Checks if a point is inside the zone (edge included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Direction of an overlap transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlapKind {
    /// The creature moved into the zone
    Enter,
    /// The creature left the zone
    Exit,
}

/// Overlap transition between one creature and one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEvent {
    /// Creature involved
    pub creature: EntityId,
    /// Zone involved
    pub zone: EntityId,
    /// Cover kind of the zone
    pub tag: ZoneTag,
    /// Enter or exit
    pub kind: OverlapKind,
}

/// All cover zones in the scene plus the overlaps seen last frame.
#[derive(Debug, Clone, Default)]
pub struct CoverZones {
    zones: Vec<CoverZone>,
    inside: BTreeSet<(EntityId, EntityId)>,
}

impl CoverZones {
    /// Creates an empty zone set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone. Returns its id.
    pub fn add(&mut self, zone: CoverZone) -> EntityId {
        let id = zone.id;
        self.zones.push(zone);
        id
    }

    /// Returns all zones.
    #[must_use]
    pub fn zones(&self) -> &[CoverZone] {
        &self.zones
    }

    /// Checks if a creature overlapped a zone at the last detection.
    #[must_use]
    pub fn is_inside(&self, creature: EntityId, zone: EntityId) -> bool {
        self.inside.contains(&(creature, zone))
    }

    /// Computes overlap transitions for the given creature positions.
    ///
    /// Creatures missing from `creatures` are forgotten silently; no exit is
    /// reported for them.
    pub fn detect(&mut self, creatures: impl IntoIterator<Item = (EntityId, Vec2)>) -> Vec<ZoneEvent> {
        let mut events = Vec::new();
        let mut now_inside = BTreeSet::new();

        for (creature, position) in creatures {
            for zone in &self.zones {
                let key = (creature, zone.id);
                let was_inside = self.inside.contains(&key);
                let is_inside = zone.contains(position);

                if is_inside {
                    now_inside.insert(key);
                }

                let kind = match (was_inside, is_inside) {
                    (false, true) => OverlapKind::Enter,
                    (true, false) => OverlapKind::Exit,
                    _ => continue,
                };

                trace!("Creature {creature} {kind:?} {:?} zone {}", zone.tag, zone.id);
                events.push(ZoneEvent {
                    creature,
                    zone: zone.id,
                    tag: zone.tag,
                    kind,
                });
            }
        }

        self.inside = now_inside;
        events
    }
}
