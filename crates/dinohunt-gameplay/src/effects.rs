//! Visual effect spawning.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Particle effects produced by player attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    /// Basic click impact
    Impact,
    /// Meteor explosion
    Meteor,
    /// Fire burst
    Fire,
}

impl EffectKind {
    /// Display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Impact => "Impact",
            Self::Meteor => "Meteor",
            Self::Fire => "Fire",
        }
    }
}

/// Instantiates fire-and-forget effects in the host scene.
pub trait EffectSpawner {
    /// Spawns an effect at a world position.
    fn spawn(&mut self, kind: EffectKind, position: Vec3);
}

/// Recording effect spawner. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MockEffects {
    spawned: Rc<RefCell<Vec<(EffectKind, Vec3)>>>,
}

impl MockEffects {
    /// Returns every spawn so far, oldest first.
    #[must_use]
    pub fn spawned(&self) -> Vec<(EffectKind, Vec3)> {
        self.spawned.borrow().clone()
    }

    /// Returns the positions of every spawn of one kind.
    #[must_use]
    pub fn spawned_of(&self, kind: EffectKind) -> Vec<Vec3> {
        self.spawned
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, position)| *position)
            .collect()
    }
}

impl EffectSpawner for MockEffects {
    fn spawn(&mut self, kind: EffectKind, position: Vec3) {
        self.spawned.borrow_mut().push((kind, position));
    }
}
