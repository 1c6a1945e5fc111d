//! Creature roster.
//!
//! Owns every creature in the scene, drives their per-frame updates from a
//! single seeded RNG, and is the [`DamageSink`] player attacks hit.

use std::collections::BTreeMap;

use dinohunt_common::{EntityId, RosterError};
use glam::Vec2;
use tracing::{debug, info};

use crate::animation::AnimationClip;
use crate::attack::DamageSink;
use crate::creature::{CreatureController, DamageChannel, DamageOutcome};
use crate::events::{CombatEvent, EventBus};
use crate::spatial::{Collider, ColliderTag, SpatialIndex};
use crate::zones::{OverlapKind, ZoneEvent};

/// All creatures in a scene.
#[derive(Debug)]
pub struct CreatureRoster {
    creatures: BTreeMap<EntityId, CreatureController>,
    rng: fastrand::Rng,
    events: Option<EventBus>,
}

impl CreatureRoster {
    /// Creates an empty roster. The seed drives every wander destination.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            creatures: BTreeMap::new(),
            rng: fastrand::Rng::with_seed(seed),
            events: None,
        }
    }

    /// Publishes damage and removal events to the given bus.
    #[must_use]
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Adds a creature.
    pub fn insert(&mut self, creature: CreatureController) -> Result<EntityId, RosterError> {
        let id = creature.id();
        if self.creatures.contains_key(&id) {
            return Err(RosterError::AlreadyRegistered(id));
        }
        debug!("Spawned {} {id} at {:?}", creature.kind().display_name(), creature.position_2d());
        self.creatures.insert(id, creature);
        Ok(id)
    }

    /// Gets a creature by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&CreatureController> {
        self.creatures.get(&id)
    }

    /// Gets a mutable creature by id.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut CreatureController> {
        self.creatures.get_mut(&id)
    }

    /// Iterates creatures in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CreatureController> {
        self.creatures.values()
    }

    /// Planar positions of every creature, for zone detection.
    pub fn positions(&self) -> impl Iterator<Item = (EntityId, Vec2)> + '_ {
        self.creatures.iter().map(|(&id, c)| (id, c.position_2d()))
    }

    /// Number of creatures, dead ones included until swept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Checks if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Number of living creatures.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.creatures.values().filter(|c| !c.is_dead()).count()
    }

    /// Runs one frame of wandering for every creature.
    pub fn update(&mut self, dt: f32) {
        for creature in self.creatures.values_mut() {
            creature.update(dt, &mut self.rng);
        }
    }

    /// Writes every creature's collider into the index and drops colliders
    /// of creatures no longer in the roster.
    ///
    /// Dead creatures keep their collider until removed, so they still
    /// absorb clicks.
    pub fn sync_colliders(&self, index: &mut SpatialIndex) {
        index.retain(|id| self.creatures.contains_key(&id));
        for (&id, creature) in &self.creatures {
            index.upsert(
                id,
                Collider {
                    center: creature.position_2d(),
                    radius: creature.config().collider_radius,
                    tag: ColliderTag::Creature,
                },
            );
        }
    }

    /// Forwards a zone overlap transition to its creature.
    pub fn apply_zone_event(&mut self, event: &ZoneEvent) {
        let Some(creature) = self.creatures.get_mut(&event.creature) else {
            return;
        };
        match event.kind {
            OverlapKind::Enter => creature.enter_zone(event.tag),
            OverlapKind::Exit => creature.exit_zone(event.tag),
        }
    }

    /// Host callback for a finished one-shot animation.
    pub fn notify_animation_finished(&mut self, id: EntityId, clip: AnimationClip) -> Result<(), RosterError> {
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or(RosterError::UnknownCreature(id))?;
        creature.on_animation_finished(clip);
        Ok(())
    }

    /// Resumes a creature's wandering after a hit.
    pub fn resume(&mut self, id: EntityId) -> Result<(), RosterError> {
        self.creatures
            .get_mut(&id)
            .ok_or(RosterError::UnknownCreature(id))?
            .resume_movement();
        Ok(())
    }

    /// Removes every creature marked for destruction. Returns their ids.
    pub fn sweep_destroyed(&mut self) -> Vec<EntityId> {
        let removed: Vec<EntityId> = self
            .creatures
            .iter()
            .filter(|(_, c)| c.is_destroyed())
            .map(|(&id, _)| id)
            .collect();

        for id in &removed {
            self.creatures.remove(id);
            info!("Removed creature {id}");
            self.publish(CombatEvent::CreatureDespawned { creature: *id });
        }
        removed
    }

    fn apply(&mut self, channel: DamageChannel, target: EntityId, amount: i32) -> DamageOutcome {
        let Some(creature) = self.creatures.get_mut(&target) else {
            debug!("Damage for unknown creature {target} dropped");
            return DamageOutcome::Ignored;
        };

        let outcome = creature.apply_damage(channel, amount);
        match outcome {
            DamageOutcome::Ignored => {},
            DamageOutcome::Hurt { remaining } => self.publish(CombatEvent::CreatureHurt {
                creature: target,
                channel,
                amount,
                remaining,
            }),
            DamageOutcome::Killed => self.publish(CombatEvent::CreatureKilled {
                creature: target,
                channel,
            }),
        }
        outcome
    }

    fn publish(&self, event: CombatEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

impl DamageSink for CreatureRoster {
    fn apply_direct_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome {
        self.apply(DamageChannel::Direct, target, amount)
    }

    fn apply_area_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome {
        self.apply(DamageChannel::Area, target, amount)
    }
}
