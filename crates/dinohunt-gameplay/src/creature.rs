//! Wandering, attackable creatures.
//!
//! A creature walks between random waypoints inside the world bounds,
//! pauses at each one, and reacts to damage:
//!
//! ```text
//! Moving ──arrive──▶ Idle ──wait──▶ Moving ...
//!    │                 │
//!    └──── damage ─────┴──▶ Hit ──resume──▶ Moving
//!                      └──▶ Dead (terminal)
//! ```
//!
//! Damage arrives through two channels. Direct damage always lands on a
//! living creature; area damage is also dropped while the creature sits in
//! qualifying cover.

use std::fmt;

use dinohunt_common::{EntityId, WorldBounds};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animation::{AnimationClip, AnimationPlayer};
use crate::audio::{AudioPlayer, SoundCue};
use crate::zones::ZoneTag;

/// Distance at which a waypoint counts as reached.
pub const DESTINATION_RADIUS: f32 = 0.1;

/// Creature species. Decides which cover zones protect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CreatureKind {
    /// Small and quick, hides in bushes and under trees
    Raptor,
    /// Large, only trees can hide it
    Rex,
    /// Never takes cover
    #[default]
    Grazer,
}

impl CreatureKind {
    /// Display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Raptor => "Raptor",
            Self::Rex => "Rex",
            Self::Grazer => "Grazer",
        }
    }

    /// Checks if a zone of this tag shields the creature from area damage.
    #[must_use]
    pub const fn is_covered_by(self, zone: ZoneTag) -> bool {
        match zone {
            ZoneTag::Bush => matches!(self, Self::Raptor),
            ZoneTag::Tree => matches!(self, Self::Raptor | Self::Rex),
        }
    }
}

/// Per-creature tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureConfig {
    /// Species
    pub kind: CreatureKind,
    /// Starting health
    pub health: i32,
    /// Travel speed in world units per second
    pub speed: f32,
    /// Pause at each waypoint in seconds
    pub idle_wait: f32,
    /// Collider radius for attack queries and zone overlaps
    pub collider_radius: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            kind: CreatureKind::Grazer,
            health: 30,
            speed: 1.5,
            idle_wait: 2.0,
            collider_radius: 0.5,
        }
    }
}

/// Behavior state of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureState {
    /// Walking toward the current waypoint
    Moving,
    /// Pausing at a reached waypoint
    Idle,
    /// Playing the hit reaction, movement suspended
    Hit,
    /// Dead, waiting for removal
    Dead,
}

/// Damage channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageChannel {
    /// Single-target damage, lands regardless of cover
    Direct,
    /// Splash damage, blocked by cover
    Area,
}

/// Result of a damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// The damage was discarded (dead, covered or unknown target)
    Ignored,
    /// The creature survived
    Hurt {
        /// Health left
        remaining: i32,
    },
    /// The creature died from this hit
    Killed,
}

impl DamageOutcome {
    /// Checks if health changed.
    #[must_use]
    pub fn landed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// One creature's movement, health and cover state.
pub struct CreatureController {
    id: EntityId,
    config: CreatureConfig,
    bounds: WorldBounds,
    health: i32,
    state: CreatureState,
    position: Vec3,
    start_position: Vec3,
    destination: Vec3,
    has_destination: bool,
    stopped: bool,
    destroyed: bool,
    cover_count: u32,
    elapsed: f32,
    wait_timer: f32,
    flip_x: bool,
    animator: Box<dyn AnimationPlayer>,
    audio: Box<dyn AudioPlayer>,
}

impl fmt::Debug for CreatureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatureController")
            .field("id", &self.id)
            .field("kind", &self.config.kind)
            .field("health", &self.health)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("destination", &self.destination)
            .field("stopped", &self.stopped)
            .field("invincible", &self.is_invincible())
            .finish_non_exhaustive()
    }
}

impl CreatureController {
    /// Creates a creature at `position` and starts its run animation.
    ///
    /// The z component of `position` is the render depth and is kept for
    /// every waypoint.
    #[must_use]
    pub fn new(
        id: EntityId,
        config: CreatureConfig,
        position: Vec3,
        bounds: WorldBounds,
        mut animator: Box<dyn AnimationPlayer>,
        audio: Box<dyn AudioPlayer>,
    ) -> Self {
        animator.play(AnimationClip::Run);
        Self {
            id,
            config,
            bounds,
            health: config.health,
            state: CreatureState::Moving,
            position,
            start_position: position,
            destination: Vec3::new(0.0, 0.0, position.z),
            has_destination: false,
            stopped: false,
            destroyed: false,
            cover_count: 0,
            elapsed: 0.0,
            wait_timer: 0.0,
            flip_x: false,
            animator,
            audio,
        }
    }

    /// Advances wandering by one frame.
    ///
    /// No-op while movement is suspended or the creature is dead.
    pub fn update(&mut self, dt: f32, rng: &mut fastrand::Rng) {
        if self.stopped || self.is_dead() {
            return;
        }

        match self.state {
            CreatureState::Moving => {
                if !self.has_destination {
                    self.choose_destination(rng);
                }
                if self.position.distance(self.destination) <= DESTINATION_RADIUS {
                    self.enter_idle();
                } else {
                    self.advance(dt);
                }
                self.face_destination();
            },
            CreatureState::Idle => {
                self.wait_timer += dt;
                if self.wait_timer >= self.config.idle_wait {
                    self.leave_idle();
                }
            },
            CreatureState::Hit | CreatureState::Dead => {},
        }
    }

    fn choose_destination(&mut self, rng: &mut fastrand::Rng) {
        let target = self.bounds.sample(rng);
        self.start_position = self.position;
        self.destination = target.extend(self.position.z);
        self.elapsed = 0.0;
        self.has_destination = true;
        debug!(
            "{} {} heading to ({:.2}, {:.2})",
            self.config.kind.display_name(),
            self.id,
            target.x,
            target.y
        );
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += self.config.speed * dt;
        let segment = self.start_position.distance(self.destination);
        self.position = if segment <= f32::EPSILON {
            self.destination
        } else {
            let t = (self.elapsed / segment).clamp(0.0, 1.0);
            self.start_position.lerp(self.destination, t)
        };
    }

    fn face_destination(&mut self) {
        self.flip_x = self.destination.x - self.position.x < 0.0;
    }

    fn enter_idle(&mut self) {
        self.state = CreatureState::Idle;
        self.elapsed = 0.0;
        self.wait_timer = 0.0;
        self.animator.restart();
        self.animator.play(AnimationClip::Idle);
    }

    fn leave_idle(&mut self) {
        self.state = CreatureState::Moving;
        self.elapsed = 0.0;
        self.wait_timer = 0.0;
        self.has_destination = false;
        self.animator.restart();
        self.animator.play(AnimationClip::Run);
    }

    /// Applies damage through the given channel.
    pub fn apply_damage(&mut self, channel: DamageChannel, amount: i32) -> DamageOutcome {
        match channel {
            DamageChannel::Direct => self.apply_direct_damage(amount),
            DamageChannel::Area => self.apply_area_damage(amount),
        }
    }

    /// Applies single-target damage. Ignored once dead.
    pub fn apply_direct_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }
        self.take_damage(amount)
    }

    /// Applies splash damage. Ignored once dead or while in cover.
    pub fn apply_area_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }
        if self.is_invincible() {
            debug!("{} {} shrugs off area damage in cover", self.config.kind.display_name(), self.id);
            return DamageOutcome::Ignored;
        }
        self.take_damage(amount)
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health = self.health.saturating_sub(amount);
        self.suspend_movement();

        if self.health > 0 {
            self.state = CreatureState::Hit;
            self.audio.play(SoundCue::Hit);
            self.animator.play(AnimationClip::Hit);
            debug!("{} {} hit for {amount}, {} left", self.config.kind.display_name(), self.id, self.health);
            DamageOutcome::Hurt {
                remaining: self.health,
            }
        } else {
            self.state = CreatureState::Dead;
            self.audio.play(SoundCue::Death);
            self.animator.play(AnimationClip::Death);
            info!("{} {} killed", self.config.kind.display_name(), self.id);
            DamageOutcome::Killed
        }
    }

    fn suspend_movement(&mut self) {
        self.stopped = true;
        self.elapsed = 0.0;
        self.wait_timer = 0.0;
        self.has_destination = false;
        self.animator.restart();
    }

    /// Resumes wandering after a hit reaction. Ignored once dead or when
    /// movement was never suspended, so an idle pause keeps its timer.
    pub fn resume_movement(&mut self) {
        if !self.stopped || self.is_dead() || self.destroyed {
            return;
        }
        self.stopped = false;
        self.state = CreatureState::Moving;
        self.animator.restart();
        self.animator.play(AnimationClip::Run);
    }

    /// Marks the creature for removal from the scene.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            debug!("{} {} marked for removal", self.config.kind.display_name(), self.id);
            self.destroyed = true;
        }
    }

    /// Host callback for the end of a one-shot clip.
    ///
    /// The end of `Hit` resumes movement, the end of `Death` destroys the
    /// creature.
    pub fn on_animation_finished(&mut self, clip: AnimationClip) {
        match clip {
            AnimationClip::Hit => self.resume_movement(),
            AnimationClip::Death => self.destroy(),
            AnimationClip::Run | AnimationClip::Idle => {},
        }
    }

    /// Called when the creature starts overlapping a cover zone.
    pub fn enter_zone(&mut self, tag: ZoneTag) {
        if self.is_dead() || !self.config.kind.is_covered_by(tag) {
            return;
        }
        self.cover_count += 1;
    }

    /// Called when the creature stops overlapping a cover zone.
    pub fn exit_zone(&mut self, tag: ZoneTag) {
        if self.is_dead() || !self.config.kind.is_covered_by(tag) {
            return;
        }
        self.cover_count = self.cover_count.saturating_sub(1);
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Species.
    #[must_use]
    pub fn kind(&self) -> CreatureKind {
        self.config.kind
    }

    /// Tuning the creature was created with.
    #[must_use]
    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    /// Current health. May be negative once dead.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current behavior state.
    #[must_use]
    pub fn state(&self) -> CreatureState {
        self.state
    }

    /// Checks if the creature is dead.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.state == CreatureState::Dead
    }

    /// Checks if the creature was marked for removal.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Checks if movement is suspended.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Checks if area damage is currently blocked.
    #[must_use]
    pub fn is_invincible(&self) -> bool {
        self.cover_count > 0
    }

    /// Position including render depth.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position in the gameplay plane.
    #[must_use]
    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Current waypoint, if one has been chosen.
    #[must_use]
    pub fn destination(&self) -> Option<Vec3> {
        self.has_destination.then_some(self.destination)
    }

    /// Seconds spent idling at the current waypoint.
    #[must_use]
    pub fn wait_timer(&self) -> f32 {
        self.wait_timer
    }

    /// Whether the sprite is mirrored to face left.
    #[must_use]
    pub fn flip_x(&self) -> bool {
        self.flip_x
    }
}
