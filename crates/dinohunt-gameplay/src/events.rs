//! Event bus for combat notifications.
//!
//! Gameplay publishes, the host drains once per frame.

use crossbeam_channel::{bounded, Receiver, Sender};
use dinohunt_common::EntityId;
use glam::Vec2;
use tracing::warn;

use crate::attack::AttackMode;
use crate::creature::DamageChannel;

/// Events that can be sent through the event bus.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// A creature survived a hit
    CreatureHurt {
        /// Creature hit
        creature: EntityId,
        /// Channel the damage came through
        channel: DamageChannel,
        /// Damage amount
        amount: i32,
        /// Health left
        remaining: i32,
    },
    /// A creature died
    CreatureKilled {
        /// Creature killed
        creature: EntityId,
        /// Channel of the killing blow
        channel: DamageChannel,
    },
    /// A dead creature was removed from the scene
    CreatureDespawned {
        /// Creature removed
        creature: EntityId,
    },
    /// The player launched an attack
    AttackLaunched {
        /// Attack used
        mode: AttackMode,
        /// Target point in world space
        target: Vec2,
    },
    /// A scheduled meteor struck
    MeteorStruck {
        /// Impact point
        target: Vec2,
        /// Creatures caught in the blast
        creatures_hit: usize,
    },
}

/// Event bus for broadcasting events to the host.
///
/// Clones share one channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Sender<CombatEvent>,
    receiver: Receiver<CombatEvent>,
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl EventBus {
    /// Creates a new event bus with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// Publishes an event to the bus.
    pub fn publish(&self, event: CombatEvent) {
        // Non-blocking send - if full, event is dropped
        if self.sender.try_send(event).is_err() {
            warn!("Event bus full ({} events), dropping event", self.capacity);
        }
    }

    /// Drains all pending events.
    pub fn drain(&self) -> Vec<CombatEvent> {
        self.receiver.try_iter().collect()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
