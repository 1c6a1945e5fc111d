//! Headless frame loop.
//!
//! Builds the scene from [`GameConfig`], then steps gameplay at a fixed rate
//! until the match clock runs out or every creature is gone.

use std::collections::BTreeMap;

use anyhow::Result;
use dinohunt_common::{EntityId, WorldBounds};
use dinohunt_gameplay::{
    AnimationClip, AttackController, CombatEvent, CoverZone, CoverZones, CreatureController, CreatureRoster,
    EffectKind, EventBus, InputState, MatchClock, MatchPhase, MatchState, SpatialIndex,
};
use glam::Vec3;
use tracing::{debug, info};

use crate::autopilot::Autopilot;
use crate::config::GameConfig;
use crate::host::{EffectTally, LoggingAnimator, LoggingAudio};

/// Totals gathered over one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Frames stepped
    pub frames: u64,
    /// Simulated seconds
    pub elapsed: f32,
    /// Attacks launched
    pub launches: usize,
    /// Meteors that detonated
    pub meteors: usize,
    /// Hits that left the creature alive
    pub hits: usize,
    /// Creatures killed
    pub kills: usize,
    /// Creatures removed from the scene
    pub despawned: usize,
    /// Creatures still alive at the end
    pub survivors: usize,
    /// Effects spawned
    pub effects: usize,
}

/// One headless match.
#[derive(Debug)]
pub struct Simulation {
    roster: CreatureRoster,
    index: SpatialIndex,
    zones: CoverZones,
    attacks: AttackController,
    clock: MatchClock,
    input: InputState,
    autopilot: Autopilot,
    bus: EventBus,
    effects: EffectTally,
    clip_timers: BTreeMap<EntityId, (AnimationClip, f32)>,
    hit_clip_secs: f32,
    death_clip_secs: f32,
    stats: RunStats,
}

impl Simulation {
    /// Builds the scene described by `config`.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self> {
        let bus = EventBus::default();
        let bounds: WorldBounds = config.world.bounds();

        let mut roster = CreatureRoster::new(seed).with_event_bus(bus.clone());
        for spawn in &config.creatures {
            let id = EntityId::new();
            let creature = CreatureController::new(
                id,
                spawn.creature,
                Vec3::new(spawn.x, spawn.y, spawn.depth),
                bounds,
                Box::new(LoggingAnimator::new(id)),
                Box::new(LoggingAudio::new(id)),
            );
            roster.insert(creature)?;
            debug!("Spawned {} {id} at ({}, {})", spawn.creature.kind.display_name(), spawn.x, spawn.y);
        }

        let mut zones = CoverZones::new();
        for zone in &config.zones {
            zones.add(CoverZone::new(zone.tag, zone.center(), zone.radius));
        }

        let effects = EffectTally::default();
        let attacks =
            AttackController::new(config.attacks, Box::new(effects.clone())).with_event_bus(bus.clone());
        let autopilot = Autopilot::new(
            config.autopilot.clone(),
            config.attacks.bindings,
            seed.wrapping_add(1),
        );

        info!(
            "Scene ready: {} creatures, {} cover zones",
            roster.len(),
            zones.zones().len()
        );

        Ok(Self {
            roster,
            index: SpatialIndex::new(),
            zones,
            attacks,
            clock: MatchClock::new(Some(config.session.duration_secs)),
            input: InputState::new(),
            autopilot,
            bus,
            effects,
            clip_timers: BTreeMap::new(),
            hit_clip_secs: config.world.hit_clip_secs,
            death_clip_secs: config.world.death_clip_secs,
            stats: RunStats::default(),
        })
    }

    /// Advances every system by one frame.
    pub fn step(&mut self, dt: f32) {
        self.autopilot.drive(dt, &mut self.input, &self.roster, &self.attacks);
        self.clock.tick(dt);

        self.roster.update(dt);
        let events = self.zones.detect(self.roster.positions());
        for event in &events {
            self.roster.apply_zone_event(event);
        }
        self.roster.sync_colliders(&mut self.index);

        self.attacks
            .update(dt, &self.input, &self.clock, &self.index, &mut self.roster);

        self.tick_clips(dt);
        self.roster.sweep_destroyed();
        self.collect_events();

        self.input.end_frame();
        self.stats.frames += 1;
        self.stats.elapsed += dt;
    }

    /// Runs until the clock finishes or the scene is empty.
    pub fn run(&mut self, dt: f32) -> RunStats {
        self.clock.start();
        while self.clock.is_active() && !self.roster.is_empty() {
            self.step(dt);
        }
        if self.clock.phase() != MatchPhase::Finished {
            self.clock.finish();
        }
        self.summary()
    }

    /// Stats so far, with end-of-run fields filled in.
    #[must_use]
    pub fn summary(&self) -> RunStats {
        RunStats {
            survivors: self.roster.alive_count(),
            effects: self.effects.total(),
            ..self.stats.clone()
        }
    }

    /// Creatures in the scene.
    #[must_use]
    pub fn roster(&self) -> &CreatureRoster {
        &self.roster
    }

    /// Spawned effects of one kind.
    #[must_use]
    pub fn effect_count(&self, kind: EffectKind) -> usize {
        self.effects.count(kind)
    }

    /// Stands in for animation end callbacks: each pending clip counts down
    /// and reports back when it runs out.
    fn tick_clips(&mut self, dt: f32) {
        let mut finished = Vec::new();
        for (&id, (clip, remaining)) in &mut self.clip_timers {
            *remaining -= dt;
            if *remaining <= 0.0 {
                finished.push((id, *clip));
            }
        }

        for (id, clip) in finished {
            self.clip_timers.remove(&id);
            if let Err(e) = self.roster.notify_animation_finished(id, clip) {
                debug!("Dropped {} clip end: {e}", clip.name());
            }
        }
    }

    fn collect_events(&mut self) {
        for event in self.bus.drain() {
            match event {
                CombatEvent::CreatureHurt { creature, .. } => {
                    self.stats.hits += 1;
                    self.clip_timers
                        .insert(creature, (AnimationClip::Hit, self.hit_clip_secs));
                },
                CombatEvent::CreatureKilled { creature, channel } => {
                    self.stats.kills += 1;
                    info!("{creature} killed by {channel:?} damage");
                    self.clip_timers
                        .insert(creature, (AnimationClip::Death, self.death_clip_secs));
                },
                CombatEvent::CreatureDespawned { creature } => {
                    self.stats.despawned += 1;
                    self.clip_timers.remove(&creature);
                },
                CombatEvent::AttackLaunched { .. } => self.stats.launches += 1,
                CombatEvent::MeteorStruck { .. } => self.stats.meteors += 1,
            }
        }
    }
}
