//! Animation player interface.
//!
//! Sprite animation lives in the host. Creatures only name the clip that
//! should be playing and ask for a restart when a reaction must replay
//! from frame zero.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Animation clips a creature can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationClip {
    /// Looping run cycle while travelling
    Run,
    /// Looping idle while pausing at a waypoint
    Idle,
    /// One-shot hit reaction
    Hit,
    /// One-shot death, ends with the creature being removed
    Death,
}

impl AnimationClip {
    /// Clip name as used by sprite sheets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Idle => "Idle",
            Self::Hit => "Hit",
            Self::Death => "Death",
        }
    }

    /// Whether the clip loops until replaced.
    #[must_use]
    pub const fn is_looping(self) -> bool {
        matches!(self, Self::Run | Self::Idle)
    }
}

/// Host-side animation playback for one sprite.
pub trait AnimationPlayer {
    /// Switches to the given clip.
    fn play(&mut self, clip: AnimationClip);

    /// Restarts the current clip from its first frame.
    fn restart(&mut self);
}

/// A call recorded by [`MockAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorCall {
    /// `play(clip)`
    Play(AnimationClip),
    /// `restart()`
    Restart,
}

/// Recording animation player for tests and headless runs.
///
/// Clones share the same call log, so a test can keep one handle while the
/// creature owns another.
#[derive(Debug, Clone, Default)]
pub struct MockAnimator {
    calls: Rc<RefCell<Vec<AnimatorCall>>>,
}

impl MockAnimator {
    /// Returns every call recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<AnimatorCall> {
        self.calls.borrow().clone()
    }

    /// Returns the most recently played clip.
    #[must_use]
    pub fn current(&self) -> Option<AnimationClip> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            AnimatorCall::Play(clip) => Some(*clip),
            AnimatorCall::Restart => None,
        })
    }

    /// Counts how many times a clip was played.
    #[must_use]
    pub fn play_count(&self, clip: AnimationClip) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == AnimatorCall::Play(clip))
            .count()
    }
}

impl AnimationPlayer for MockAnimator {
    fn play(&mut self, clip: AnimationClip) {
        self.calls.borrow_mut().push(AnimatorCall::Play(clip));
    }

    fn restart(&mut self) {
        self.calls.borrow_mut().push(AnimatorCall::Restart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_animator_shares_log() {
        let handle = MockAnimator::default();
        let mut player: Box<dyn AnimationPlayer> = Box::new(handle.clone());

        player.play(AnimationClip::Run);
        player.restart();
        player.play(AnimationClip::Idle);

        assert_eq!(handle.current(), Some(AnimationClip::Idle));
        assert_eq!(handle.play_count(AnimationClip::Run), 1);
        assert_eq!(handle.calls().len(), 3);
    }

    #[test]
    fn test_clip_looping() {
        assert!(AnimationClip::Run.is_looping());
        assert!(!AnimationClip::Death.is_looping());
        assert_eq!(AnimationClip::Hit.name(), "Hit");
    }
}
