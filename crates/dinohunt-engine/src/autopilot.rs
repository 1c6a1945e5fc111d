//! Scripted player for headless sessions.
//!
//! Stands in for a human at the mouse: every few seconds it picks a living
//! creature, selects an attack with the bound key, then clicks (or holds,
//! for fire) on the target with some aiming error.

use dinohunt_common::EntityId;
use dinohunt_gameplay::{AttackBindings, AttackController, AttackMode, CreatureRoster, InputState, KeyCode};
use glam::Vec2;
use tracing::debug;

use crate::config::AutopilotConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Counting down to the next attack
    Waiting { remaining: f32 },
    /// Attack key pressed last frame; click this frame
    Arming { target: EntityId, mode: AttackMode },
    /// Button held down
    Holding { target: EntityId, remaining: f32 },
}

/// Scripted attacker.
#[derive(Debug)]
pub struct Autopilot {
    config: AutopilotConfig,
    bindings: AttackBindings,
    phase: Phase,
    rotation: usize,
    held_key: Option<KeyCode>,
    rng: fastrand::Rng,
}

const ROTATION: [AttackMode; 3] = [AttackMode::Basic, AttackMode::Meteor, AttackMode::Fire];

impl Autopilot {
    /// Creates an autopilot that waits one interval before its first attack.
    #[must_use]
    pub fn new(config: AutopilotConfig, bindings: AttackBindings, seed: u64) -> Self {
        Self {
            phase: Phase::Waiting {
                remaining: config.attack_interval,
            },
            config,
            bindings,
            rotation: 0,
            held_key: None,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Writes this frame's input.
    pub fn drive(&mut self, dt: f32, input: &mut InputState, roster: &CreatureRoster, attacks: &AttackController) {
        if let Some(key) = self.held_key.take() {
            input.update_key(key, false);
        }

        self.phase = match self.phase {
            Phase::Waiting { remaining } if remaining > dt => Phase::Waiting {
                remaining: remaining - dt,
            },
            Phase::Waiting { .. } => self.arm(input, roster, attacks),
            Phase::Arming { target, mode } => {
                self.aim(input, roster, target);
                input.update_mouse_button(self.bindings.trigger, true);
                let hold = if mode == AttackMode::Fire {
                    self.config.fire_hold_secs
                } else {
                    0.0
                };
                Phase::Holding {
                    target,
                    remaining: hold,
                }
            },
            Phase::Holding { target, remaining } if remaining > dt => {
                self.aim(input, roster, target);
                Phase::Holding {
                    target,
                    remaining: remaining - dt,
                }
            },
            Phase::Holding { .. } => {
                input.update_mouse_button(self.bindings.trigger, false);
                Phase::Waiting {
                    remaining: self.config.attack_interval,
                }
            },
        };
    }

    fn arm(&mut self, input: &mut InputState, roster: &CreatureRoster, attacks: &AttackController) -> Phase {
        let living: Vec<EntityId> = roster.iter().filter(|c| !c.is_dead()).map(|c| c.id()).collect();
        if living.is_empty() {
            return Phase::Waiting {
                remaining: self.config.attack_interval,
            };
        }
        let target = living[self.rng.usize(..living.len())];
        let mode = self.next_mode(attacks);

        let key = match mode {
            AttackMode::Basic => self.bindings.basic,
            AttackMode::Meteor => self.bindings.meteor,
            AttackMode::Fire => self.bindings.fire,
        };
        input.update_key(key, true);
        self.held_key = Some(key);
        self.aim(input, roster, target);

        debug!("Autopilot picks {mode:?} on {target}");
        Phase::Arming { target, mode }
    }

    fn next_mode(&mut self, attacks: &AttackController) -> AttackMode {
        let mode = ROTATION[self.rotation % ROTATION.len()];
        self.rotation += 1;
        match mode {
            AttackMode::Meteor if !attacks.meteor_ready() => AttackMode::Basic,
            AttackMode::Fire if !attacks.fire_ready() => AttackMode::Basic,
            other => other,
        }
    }

    fn aim(&mut self, input: &mut InputState, roster: &CreatureRoster, target: EntityId) {
        let Some(creature) = roster.get(target) else {
            return;
        };
        let jitter = self.config.aim_jitter;
        let offset = Vec2::new(
            (self.rng.f32() * 2.0 - 1.0) * jitter,
            (self.rng.f32() * 2.0 - 1.0) * jitter,
        );
        input.set_cursor_world(creature.position_2d() + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinohunt_common::WorldBounds;
    use dinohunt_gameplay::{
        AttackConfig, CreatureConfig, CreatureController, MockAnimator, MockAudio, MockEffects, MouseButton,
    };

    fn setup() -> (Autopilot, CreatureRoster, AttackController, EntityId) {
        let config = AutopilotConfig {
            attack_interval: 0.5,
            fire_hold_secs: 0.2,
            aim_jitter: 0.0,
        };
        let mut roster = CreatureRoster::new(3);
        let id = roster
            .insert(CreatureController::new(
                EntityId::new(),
                CreatureConfig::default(),
                glam::Vec3::new(2.0, 1.0, 0.0),
                WorldBounds::default(),
                Box::new(MockAnimator::default()),
                Box::new(MockAudio::default()),
            ))
            .expect("insert");
        let attacks = AttackController::new(AttackConfig::default(), Box::new(MockEffects::default()));
        (Autopilot::new(config, AttackBindings::default(), 11), roster, attacks, id)
    }

    #[test]
    fn test_selects_then_clicks_on_target() {
        let (mut pilot, roster, attacks, _) = setup();
        let mut input = InputState::new();

        pilot.drive(0.25, &mut input, &roster, &attacks);
        assert!(!input.is_key_pressed(KeyCode::A));

        input.end_frame();
        pilot.drive(0.25, &mut input, &roster, &attacks);
        assert!(input.is_key_just_pressed(KeyCode::A));
        assert!(!input.is_mouse_pressed(MouseButton::Left));
        assert_eq!(input.cursor_world(), Vec2::new(2.0, 1.0));

        input.end_frame();
        pilot.drive(0.25, &mut input, &roster, &attacks);
        assert!(!input.is_key_pressed(KeyCode::A));
        assert!(input.is_mouse_just_pressed(MouseButton::Left));

        input.end_frame();
        pilot.drive(0.25, &mut input, &roster, &attacks);
        assert!(!input.is_mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn test_rotation_falls_back_to_basic() {
        let (mut pilot, _, attacks, _) = setup();
        assert_eq!(pilot.next_mode(&attacks), AttackMode::Basic);
        assert_eq!(pilot.next_mode(&attacks), AttackMode::Meteor);
        assert_eq!(pilot.next_mode(&attacks), AttackMode::Fire);
    }

    #[test]
    fn test_idle_without_targets() {
        let (mut pilot, _, attacks, _) = setup();
        let empty = CreatureRoster::new(1);
        let mut input = InputState::new();
        for _ in 0..10 {
            pilot.drive(0.25, &mut input, &empty, &attacks);
            input.end_frame();
        }
        assert!(!input.is_mouse_pressed(MouseButton::Left));
        assert!(!input.is_key_pressed(KeyCode::A));
    }
}
