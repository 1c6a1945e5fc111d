//! Player attacks.
//!
//! Three attack modes share the primary mouse button:
//! - Basic: instant point strike on click, no cooldown
//! - Meteor: click schedules an area strike at the cursor after a fuse
//!   delay, then cools down
//! - Fire: fires while the button is held, gated by its cooldown
//!
//! Attack processing and cooldowns pause while the match is not running.
//! Meteors already on their fuse still land.

use std::fmt;

use dinohunt_common::{at_depth, ConfigError, EntityId, EFFECT_DEPTH};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::creature::DamageOutcome;
use crate::effects::{EffectKind, EffectSpawner};
use crate::events::{CombatEvent, EventBus};
use crate::input::{InputState, KeyCode, MouseButton};
use crate::match_state::MatchState;
use crate::spatial::SpatialQuery;

/// Attack mode selected by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttackMode {
    /// Single-target click
    #[default]
    Basic,
    /// Delayed area strike
    Meteor,
    /// Held single-target burst
    Fire,
}

impl AttackMode {
    /// Effect spawned when the attack lands.
    #[must_use]
    pub const fn effect(self) -> EffectKind {
        match self {
            Self::Basic => EffectKind::Impact,
            Self::Meteor => EffectKind::Meteor,
            Self::Fire => EffectKind::Fire,
        }
    }
}

/// Receives damage addressed by entity id.
///
/// Implemented by the creature roster; unknown ids yield
/// [`DamageOutcome::Ignored`].
pub trait DamageSink {
    /// Applies damage that ignores cover.
    fn apply_direct_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome;

    /// Applies damage that cover blocks.
    fn apply_area_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome;
}

/// Input bindings for attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackBindings {
    /// Selects the basic attack
    pub basic: KeyCode,
    /// Selects the meteor
    pub meteor: KeyCode,
    /// Selects fire
    pub fire: KeyCode,
    /// Button that triggers the selected attack
    pub trigger: MouseButton,
}

impl Default for AttackBindings {
    fn default() -> Self {
        Self {
            basic: KeyCode::A,
            meteor: KeyCode::Z,
            fire: KeyCode::E,
            trigger: MouseButton::Left,
        }
    }
}

/// Attack tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Damage of the basic click
    pub impact_damage: i32,
    /// Area damage of a meteor
    pub meteor_damage: i32,
    /// Damage of one fire burst
    pub fire_damage: i32,
    /// Meteor blast radius
    pub meteor_radius: f32,
    /// Seconds between meteor click and impact
    pub meteor_delay: f32,
    /// Meteor cooldown in seconds, counted from impact
    pub meteor_cooldown: f32,
    /// Fire cooldown in seconds
    pub fire_cooldown: f32,
    /// Key and button bindings
    pub bindings: AttackBindings,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            impact_damage: 10,
            meteor_damage: 30,
            fire_damage: 15,
            meteor_radius: 1.5,
            meteor_delay: 1.0,
            meteor_cooldown: 5.0,
            fire_cooldown: 0.5,
            bindings: AttackBindings::default(),
        }
    }
}

impl AttackConfig {
    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("impact_damage", self.impact_damage),
            ("meteor_damage", self.meteor_damage),
            ("fire_damage", self.fire_damage),
        ] {
            if value < 0 {
                return Err(ConfigError::invalid(
                    format!("attacks.{field}"),
                    format!("damage must not be negative, got {value}"),
                ));
            }
        }
        for (field, value) in [
            ("meteor_radius", self.meteor_radius),
            ("meteor_delay", self.meteor_delay),
            ("meteor_cooldown", self.meteor_cooldown),
            ("fire_cooldown", self.fire_cooldown),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    format!("attacks.{field}"),
                    format!("expected a finite non-negative number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Count-up cooldown timer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cooldown {
    duration: f32,
    elapsed: Option<f32>,
}

impl Cooldown {
    /// Creates a ready cooldown.
    #[must_use]
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: None,
        }
    }

    /// Starts counting from zero.
    pub fn start(&mut self) {
        self.elapsed = Some(0.0);
    }

    /// Advances the timer. Returns true on the tick it becomes ready.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed >= self.duration {
            self.elapsed = None;
            return true;
        }
        false
    }

    /// Checks if the cooldown is over.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.elapsed.is_none()
    }

    /// Progress toward ready, 1.0 when ready.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.elapsed {
            None => 1.0,
            Some(_) if self.duration <= 0.0 => 1.0,
            Some(elapsed) => (elapsed / self.duration).clamp(0.0, 1.0),
        }
    }
}

/// A meteor waiting for its fuse to burn down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingStrike {
    /// Impact point, captured when the player clicked
    pub target: Vec2,
    /// Seconds until impact
    pub remaining: f32,
}

/// Player attack state.
pub struct AttackController {
    config: AttackConfig,
    selected: AttackMode,
    meteor_fuse: Option<PendingStrike>,
    meteor_cooldown: Cooldown,
    fire_cooldown: Cooldown,
    effects: Box<dyn EffectSpawner>,
    events: Option<EventBus>,
}

impl fmt::Debug for AttackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackController")
            .field("selected", &self.selected)
            .field("meteor_fuse", &self.meteor_fuse)
            .field("meteor_cooldown", &self.meteor_cooldown)
            .field("fire_cooldown", &self.fire_cooldown)
            .finish_non_exhaustive()
    }
}

impl AttackController {
    /// Creates a controller with every attack ready and Basic selected.
    #[must_use]
    pub fn new(config: AttackConfig, effects: Box<dyn EffectSpawner>) -> Self {
        Self {
            config,
            selected: AttackMode::Basic,
            meteor_fuse: None,
            meteor_cooldown: Cooldown::new(config.meteor_cooldown),
            fire_cooldown: Cooldown::new(config.fire_cooldown),
            effects,
            events: None,
        }
    }

    /// Publishes attack events to the given bus.
    #[must_use]
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Runs one frame of attack logic.
    ///
    /// Order: pending meteors, then (only while the match is running) the
    /// trigger button, mode selection and both cooldowns.
    pub fn update<Q, D>(
        &mut self,
        dt: f32,
        input: &InputState,
        match_state: &dyn MatchState,
        spatial: &Q,
        targets: &mut D,
    ) where
        Q: SpatialQuery + ?Sized,
        D: DamageSink + ?Sized,
    {
        let detonated = self.advance_fuse(dt, spatial, targets);

        if !match_state.is_active() {
            return;
        }

        self.handle_trigger(input, spatial, targets);
        self.handle_selection(input);

        if !detonated && self.meteor_cooldown.tick(dt) {
            debug!("Meteor ready");
        }
        if self.fire_cooldown.tick(dt) {
            debug!("Fire ready");
        }
    }

    fn advance_fuse<Q, D>(&mut self, dt: f32, spatial: &Q, targets: &mut D) -> bool
    where
        Q: SpatialQuery + ?Sized,
        D: DamageSink + ?Sized,
    {
        let Some(strike) = self.meteor_fuse.as_mut() else {
            return false;
        };
        strike.remaining -= dt;
        if strike.remaining > 0.0 {
            return false;
        }

        let target = strike.target;
        self.meteor_fuse = None;
        self.meteor_cooldown.start();
        self.meteor_strike(target, spatial, targets);
        true
    }

    fn handle_trigger<Q, D>(&mut self, input: &InputState, spatial: &Q, targets: &mut D)
    where
        Q: SpatialQuery + ?Sized,
        D: DamageSink + ?Sized,
    {
        let trigger = self.config.bindings.trigger;
        let cursor = input.cursor_world();

        if input.is_mouse_just_pressed(trigger) {
            match self.selected {
                AttackMode::Basic => {
                    self.publish_launch(AttackMode::Basic, cursor);
                    self.point_strike(AttackMode::Basic, cursor, self.config.impact_damage, spatial, targets);
                },
                AttackMode::Meteor if self.meteor_ready() => self.schedule_meteor(cursor),
                AttackMode::Meteor | AttackMode::Fire => {},
            }
        } else if input.is_mouse_pressed(trigger) && self.selected == AttackMode::Fire && self.fire_ready() {
            self.fire_cooldown.start();
            self.publish_launch(AttackMode::Fire, cursor);
            self.point_strike(AttackMode::Fire, cursor, self.config.fire_damage, spatial, targets);
        }
    }

    fn handle_selection(&mut self, input: &InputState) {
        let bindings = self.config.bindings;
        let chosen = if input.is_key_just_pressed(bindings.basic) {
            Some(AttackMode::Basic)
        } else if input.is_key_just_pressed(bindings.meteor) {
            Some(AttackMode::Meteor)
        } else if input.is_key_just_pressed(bindings.fire) {
            Some(AttackMode::Fire)
        } else {
            None
        };

        if let Some(mode) = chosen {
            if mode != self.selected {
                debug!("Attack mode {:?} -> {mode:?}", self.selected);
            }
            self.selected = mode;
        }
    }

    fn schedule_meteor(&mut self, target: Vec2) {
        debug!("Meteor incoming at ({:.2}, {:.2}) in {:.2}s", target.x, target.y, self.config.meteor_delay);
        self.meteor_fuse = Some(PendingStrike {
            target,
            remaining: self.config.meteor_delay,
        });
        self.publish_launch(AttackMode::Meteor, target);
    }

    fn point_strike<Q, D>(&mut self, mode: AttackMode, target: Vec2, damage: i32, spatial: &Q, targets: &mut D)
    where
        Q: SpatialQuery + ?Sized,
        D: DamageSink + ?Sized,
    {
        self.effects.spawn(mode.effect(), at_depth(target, EFFECT_DEPTH));

        match spatial.point_query(target) {
            Some(hit) if hit.is_creature() => {
                let outcome = targets.apply_direct_damage(hit.entity, damage);
                debug!("{mode:?} hit {}: {outcome:?}", hit.entity);
            },
            _ => debug!("{mode:?} missed at ({:.2}, {:.2})", target.x, target.y),
        }
    }

    fn meteor_strike<Q, D>(&mut self, target: Vec2, spatial: &Q, targets: &mut D)
    where
        Q: SpatialQuery + ?Sized,
        D: DamageSink + ?Sized,
    {
        self.effects.spawn(EffectKind::Meteor, at_depth(target, EFFECT_DEPTH));

        let mut creatures_hit = 0;
        for hit in spatial.area_query(target, self.config.meteor_radius) {
            if !hit.is_creature() {
                continue;
            }
            creatures_hit += 1;
            let outcome = targets.apply_area_damage(hit.entity, self.config.meteor_damage);
            debug!("Meteor caught {}: {outcome:?}", hit.entity);
        }

        info!("Meteor struck ({:.2}, {:.2}), {creatures_hit} creature(s) in blast", target.x, target.y);
        if let Some(bus) = &self.events {
            bus.publish(CombatEvent::MeteorStruck {
                target,
                creatures_hit,
            });
        }
    }

    fn publish_launch(&self, mode: AttackMode, target: Vec2) {
        if let Some(bus) = &self.events {
            bus.publish(CombatEvent::AttackLaunched { mode, target });
        }
    }

    /// Currently selected mode.
    #[must_use]
    pub fn selected(&self) -> AttackMode {
        self.selected
    }

    /// Checks if a meteor can be called in.
    #[must_use]
    pub fn meteor_ready(&self) -> bool {
        self.meteor_fuse.is_none() && self.meteor_cooldown.is_ready()
    }

    /// Checks if fire can be used.
    #[must_use]
    pub fn fire_ready(&self) -> bool {
        self.fire_cooldown.is_ready()
    }

    /// Meteor gauge for the HUD: 0.0 while on the fuse, filling up while
    /// cooling down, 1.0 when ready.
    #[must_use]
    pub fn meteor_charge(&self) -> f32 {
        if self.meteor_fuse.is_some() {
            0.0
        } else {
            self.meteor_cooldown.progress()
        }
    }

    /// Meteor waiting to land, if any.
    #[must_use]
    pub fn pending_meteor(&self) -> Option<&PendingStrike> {
        self.meteor_fuse.as_ref()
    }

    /// Tuning in use.
    #[must_use]
    pub fn config(&self) -> &AttackConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::MockEffects;
    use crate::match_state::MatchClock;
    use crate::spatial::{Collider, ColliderTag, SpatialIndex};
    use glam::Vec3;

    #[derive(Debug, Default)]
    struct RecordingSink {
        direct: Vec<(EntityId, i32)>,
        area: Vec<(EntityId, i32)>,
    }

    impl DamageSink for RecordingSink {
        fn apply_direct_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome {
            self.direct.push((target, amount));
            DamageOutcome::Hurt { remaining: 1 }
        }

        fn apply_area_damage(&mut self, target: EntityId, amount: i32) -> DamageOutcome {
            self.area.push((target, amount));
            DamageOutcome::Hurt { remaining: 1 }
        }
    }

    struct Rig {
        attacks: AttackController,
        effects: MockEffects,
        input: InputState,
        clock: MatchClock,
        index: SpatialIndex,
        sink: RecordingSink,
    }

    impl Rig {
        fn new(config: AttackConfig) -> Self {
            let effects = MockEffects::default();
            let mut clock = MatchClock::new(None);
            clock.start();
            Self {
                attacks: AttackController::new(config, Box::new(effects.clone())),
                effects,
                input: InputState::new(),
                clock,
                index: SpatialIndex::new(),
                sink: RecordingSink::default(),
            }
        }

        fn frame(&mut self, dt: f32) {
            self.attacks
                .update(dt, &self.input, &self.clock, &self.index, &mut self.sink);
            self.input.end_frame();
        }

        fn select(&mut self, key: KeyCode) {
            self.input.update_key(key, true);
            self.frame(0.0);
            self.input.update_key(key, false);
        }

        fn click(&mut self, at: Vec2, dt: f32) {
            self.input.set_cursor_world(at);
            self.input.update_mouse_button(MouseButton::Left, true);
            self.frame(dt);
            self.input.update_mouse_button(MouseButton::Left, false);
        }

        fn creature(&mut self, at: Vec2) -> EntityId {
            let id = EntityId::new();
            self.index.upsert(
                id,
                Collider {
                    center: at,
                    radius: 0.5,
                    tag: ColliderTag::Creature,
                },
            );
            id
        }
    }

    #[test]
    fn test_basic_click_damages_creature() {
        let mut rig = Rig::new(AttackConfig::default());
        let target = rig.creature(Vec2::new(2.0, 1.0));

        rig.click(Vec2::new(2.1, 1.0), 0.016);

        assert_eq!(rig.sink.direct, vec![(target, 10)]);
        assert_eq!(rig.effects.spawned(), vec![(EffectKind::Impact, Vec3::new(2.1, 1.0, -6.0))]);
    }

    #[test]
    fn test_basic_miss_still_spawns_effect() {
        let mut rig = Rig::new(AttackConfig::default());
        rig.creature(Vec2::new(5.0, 3.0));

        rig.click(Vec2::ZERO, 0.016);
        rig.click(Vec2::ZERO, 0.016);

        assert!(rig.sink.direct.is_empty());
        assert_eq!(rig.effects.spawned_of(EffectKind::Impact).len(), 2);
    }

    #[test]
    fn test_scenery_hit_deals_no_damage() {
        let mut rig = Rig::new(AttackConfig::default());
        rig.index.upsert(
            EntityId::new(),
            Collider {
                center: Vec2::ZERO,
                radius: 1.0,
                tag: ColliderTag::Scenery,
            },
        );
        rig.click(Vec2::ZERO, 0.016);
        assert!(rig.sink.direct.is_empty());
    }

    #[test]
    fn test_mode_selection() {
        let mut rig = Rig::new(AttackConfig::default());
        assert_eq!(rig.attacks.selected(), AttackMode::Basic);
        rig.select(KeyCode::Z);
        assert_eq!(rig.attacks.selected(), AttackMode::Meteor);
        rig.select(KeyCode::E);
        assert_eq!(rig.attacks.selected(), AttackMode::Fire);
        rig.select(KeyCode::A);
        assert_eq!(rig.attacks.selected(), AttackMode::Basic);
    }

    #[test]
    fn test_meteor_lands_at_click_point_after_delay() {
        let config = AttackConfig {
            meteor_delay: 1.0,
            meteor_cooldown: 2.0,
            ..AttackConfig::default()
        };
        let mut rig = Rig::new(config);
        let near = rig.creature(Vec2::new(0.5, 0.0));
        let far = rig.creature(Vec2::new(6.0, 0.0));
        rig.select(KeyCode::Z);

        rig.click(Vec2::ZERO, 0.25);
        assert!(!rig.attacks.meteor_ready());
        assert_eq!(rig.attacks.meteor_charge(), 0.0);

        // Cursor moves away during the fuse; the strike keeps its target.
        rig.input.set_cursor_world(Vec2::new(6.0, 0.0));
        for _ in 0..3 {
            rig.frame(0.25);
            assert!(rig.sink.area.is_empty());
        }
        rig.frame(0.25);

        assert_eq!(rig.sink.area, vec![(near, 30)]);
        assert!(!rig.sink.area.iter().any(|(id, _)| *id == far));
        assert_eq!(rig.effects.spawned_of(EffectKind::Meteor), vec![Vec3::new(0.0, 0.0, -6.0)]);
    }

    #[test]
    fn test_meteor_ready_no_earlier_than_delay_plus_cooldown() {
        let config = AttackConfig {
            meteor_delay: 1.0,
            meteor_cooldown: 2.0,
            ..AttackConfig::default()
        };
        let mut rig = Rig::new(config);
        rig.select(KeyCode::Z);
        rig.click(Vec2::ZERO, 0.25);

        let dt = 0.25;
        let mut since_trigger = 0.0;
        while !rig.attacks.meteor_ready() {
            rig.frame(dt);
            since_trigger += dt;
            if !rig.attacks.meteor_ready() {
                continue;
            }
            assert!(since_trigger >= config.meteor_delay + config.meteor_cooldown);
        }
        assert!(since_trigger < config.meteor_delay + config.meteor_cooldown + 2.0 * dt);
        assert_eq!(rig.attacks.meteor_charge(), 1.0);
    }

    #[test]
    fn test_second_meteor_click_is_ignored_while_cooling() {
        let mut rig = Rig::new(AttackConfig::default());
        rig.select(KeyCode::Z);
        rig.click(Vec2::ZERO, 0.1);
        let first = *rig.attacks.pending_meteor().expect("fuse lit");
        rig.click(Vec2::new(3.0, 3.0), 0.1);
        let still = rig.attacks.pending_meteor().expect("fuse lit");
        assert_eq!(still.target, first.target);
    }

    #[test]
    fn test_fire_once_per_cooldown_while_held() {
        let config = AttackConfig {
            fire_cooldown: 0.5,
            ..AttackConfig::default()
        };
        let mut rig = Rig::new(config);
        let target = rig.creature(Vec2::ZERO);
        rig.select(KeyCode::E);

        rig.input.set_cursor_world(Vec2::ZERO);
        rig.input.update_mouse_button(MouseButton::Left, true);
        rig.frame(0.125);
        assert!(rig.sink.direct.is_empty(), "press frame does not fire");
        assert!(rig.effects.spawned_of(EffectKind::Fire).is_empty());

        for _ in 0..4 {
            rig.frame(0.125);
        }
        assert_eq!(rig.sink.direct, vec![(target, 15)]);
        assert!(rig.attacks.fire_ready());

        rig.frame(0.125);
        assert_eq!(rig.sink.direct.len(), 2);
        assert!(!rig.attacks.fire_ready());
        assert_eq!(rig.effects.spawned_of(EffectKind::Fire).len(), 2);
    }

    #[test]
    fn test_switching_modes_keeps_cooldowns() {
        let mut rig = Rig::new(AttackConfig::default());
        rig.select(KeyCode::E);
        rig.input.update_mouse_button(MouseButton::Left, true);
        rig.frame(0.0);
        rig.frame(0.125);
        rig.input.update_mouse_button(MouseButton::Left, false);
        assert!(!rig.attacks.fire_ready());

        rig.select(KeyCode::A);
        rig.select(KeyCode::Z);
        rig.select(KeyCode::E);
        assert!(!rig.attacks.fire_ready());

        rig.frame(0.125);
        rig.frame(0.125);
        rig.frame(0.125);
        assert!(rig.attacks.fire_ready());
    }

    #[test]
    fn test_switching_modes_during_meteor_fuse_and_cooldown() {
        let config = AttackConfig {
            meteor_delay: 1.0,
            meteor_cooldown: 2.0,
            ..AttackConfig::default()
        };
        let mut rig = Rig::new(config);
        rig.select(KeyCode::Z);
        rig.click(Vec2::ZERO, 0.0);

        let dt = 0.25;
        let mut since_trigger = 0.0;
        let keys = [KeyCode::A, KeyCode::E, KeyCode::Z];
        let mut frame = 0;
        while !rig.attacks.meteor_ready() {
            // A mode key goes down before every timed frame.
            rig.select(keys[frame % keys.len()]);
            rig.frame(dt);
            since_trigger += dt;
            frame += 1;
            assert!(frame < 100, "meteor never recharged");
        }

        assert_eq!(since_trigger, config.meteor_delay + config.meteor_cooldown);
        assert_eq!(rig.effects.spawned_of(EffectKind::Meteor).len(), 1);
    }

    #[test]
    fn test_paused_match_blocks_input_and_cooldowns() {
        let mut rig = Rig::new(AttackConfig::default());
        let target = rig.creature(Vec2::ZERO);
        rig.select(KeyCode::E);
        rig.input.update_mouse_button(MouseButton::Left, true);
        rig.frame(0.0);
        rig.frame(0.1);
        assert!(!rig.attacks.fire_ready());

        rig.clock.finish();
        for _ in 0..20 {
            rig.frame(0.1);
        }
        assert!(!rig.attacks.fire_ready());
        assert_eq!(rig.sink.direct, vec![(target, 15)]);
    }

    #[test]
    fn test_meteor_lands_after_match_ends() {
        let mut rig = Rig::new(AttackConfig::default());
        let target = rig.creature(Vec2::ZERO);
        rig.select(KeyCode::Z);
        rig.click(Vec2::ZERO, 0.1);
        rig.clock.finish();

        for _ in 0..11 {
            rig.frame(0.1);
        }
        assert_eq!(rig.sink.area, vec![(target, 30)]);
        assert!(!rig.attacks.meteor_ready());
    }

    #[test]
    fn test_config_validation() {
        assert!(AttackConfig::default().validate().is_ok());

        let negative = AttackConfig {
            fire_damage: -1,
            ..AttackConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::Invalid { field, .. }) if field == "attacks.fire_damage"
        ));

        let nan = AttackConfig {
            meteor_delay: f32::NAN,
            ..AttackConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_cooldown_progress() {
        let mut cooldown = Cooldown::new(2.0);
        assert!(cooldown.is_ready());
        cooldown.start();
        assert!(!cooldown.tick(1.0));
        assert_eq!(cooldown.progress(), 0.5);
        assert!(cooldown.tick(1.0));
        assert!(cooldown.is_ready());
        assert!(!cooldown.tick(1.0));
    }
}
