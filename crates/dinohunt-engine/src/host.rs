//! Headless stand-ins for the engine services gameplay talks to.
//!
//! Nothing is drawn or played; each call is logged and counted.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dinohunt_common::EntityId;
use dinohunt_gameplay::{
    AnimationClip, AnimationPlayer, AudioPlayer, EffectKind, EffectSpawner, SoundCue,
};
use glam::Vec3;
use tracing::trace;

/// Animation player that logs clip changes for one creature.
#[derive(Debug)]
pub struct LoggingAnimator {
    entity: EntityId,
    current: Option<AnimationClip>,
}

impl LoggingAnimator {
    /// Creates an animator for a creature.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            current: None,
        }
    }
}

impl AnimationPlayer for LoggingAnimator {
    fn play(&mut self, clip: AnimationClip) {
        if self.current != Some(clip) {
            trace!("{} animation -> {}", self.entity, clip.name());
        }
        self.current = Some(clip);
    }

    fn restart(&mut self) {
        trace!("{} animation restart", self.entity);
    }
}

/// Audio source that logs cues for one creature.
#[derive(Debug)]
pub struct LoggingAudio {
    entity: EntityId,
}

impl LoggingAudio {
    /// Creates an audio source for a creature.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }
}

impl AudioPlayer for LoggingAudio {
    fn play(&mut self, cue: SoundCue) {
        trace!("{} plays {cue:?}", self.entity);
    }
}

/// Effect spawner that tallies spawns per kind. Clones share the tally.
#[derive(Debug, Clone, Default)]
pub struct EffectTally {
    counts: Rc<RefCell<BTreeMap<EffectKind, usize>>>,
}

impl EffectTally {
    /// Number of spawns of one kind.
    #[must_use]
    pub fn count(&self, kind: EffectKind) -> usize {
        self.counts.borrow().get(&kind).copied().unwrap_or(0)
    }

    /// Number of spawns of every kind.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.borrow().values().sum()
    }
}

impl EffectSpawner for EffectTally {
    fn spawn(&mut self, kind: EffectKind, position: Vec3) {
        trace!("{} effect at ({:.2}, {:.2})", kind.display_name(), position.x, position.y);
        *self.counts.borrow_mut().entry(kind).or_insert(0) += 1;
    }
}
