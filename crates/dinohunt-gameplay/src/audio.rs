//! Audio playback interface for creature reactions.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Sounds a creature can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Pain cry on a survivable hit
    Hit,
    /// Death cry
    Death,
}

/// Host-side audio source attached to one creature.
pub trait AudioPlayer {
    /// Plays a cue, interrupting whatever this source was playing.
    fn play(&mut self, cue: SoundCue);
}

/// Recording audio player. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MockAudio {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl MockAudio {
    /// Returns every cue played so far.
    #[must_use]
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }

    /// Counts plays of one cue.
    #[must_use]
    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.borrow().iter().filter(|c| **c == cue).count()
    }
}

impl AudioPlayer for MockAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.borrow_mut().push(cue);
    }
}
