//! Game configuration.
//!
//! Everything a headless session needs: timing, world size, attack tuning,
//! the scripted player, and the creatures and cover zones to spawn.
//! Loaded from and saved to TOML.

use dinohunt_common::{ConfigError, WorldBounds};
use dinohunt_gameplay::{AttackConfig, CreatureConfig, CreatureKind, ZoneTag};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "dinohunt.toml";

/// Session timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed (None = random)
    pub seed: Option<u64>,
    /// Match length in seconds
    pub duration_secs: f32,
    /// Simulated frames per second
    pub frame_rate: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            duration_secs: 60.0,
            frame_rate: 60,
        }
    }
}

/// Hunting ground settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Half width of the wander area
    pub half_width: f32,
    /// Half height of the wander area
    pub half_height: f32,
    /// Length of the hit reaction clip in seconds
    pub hit_clip_secs: f32,
    /// Length of the death clip in seconds
    pub death_clip_secs: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            half_width: 8.0,
            half_height: 4.0,
            hit_clip_secs: 0.4,
            death_clip_secs: 1.0,
        }
    }
}

impl WorldConfig {
    /// Wander bounds.
    #[must_use]
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.half_width, self.half_height)
    }
}

/// Scripted player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Seconds between two attacks
    pub attack_interval: f32,
    /// Seconds the button stays down for fire
    pub fire_hold_secs: f32,
    /// Maximum aiming error in world units
    pub aim_jitter: f32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            attack_interval: 0.75,
            fire_hold_secs: 1.5,
            aim_jitter: 0.4,
        }
    }
}

/// A creature placed at scene setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureSpawn {
    /// Spawn x
    pub x: f32,
    /// Spawn y
    pub y: f32,
    /// Render depth
    pub depth: f32,
    /// Creature tuning
    #[serde(flatten)]
    pub creature: CreatureConfig,
}

impl Default for CreatureSpawn {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
            creature: CreatureConfig::default(),
        }
    }
}

impl CreatureSpawn {
    fn of(kind: CreatureKind, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            creature: CreatureConfig {
                kind,
                ..CreatureConfig::default()
            },
            ..Self::default()
        }
    }
}

/// A cover zone placed at scene setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpawn {
    /// Cover kind
    pub tag: ZoneTag,
    /// Center x
    pub x: f32,
    /// Center y
    pub y: f32,
    /// Radius
    pub radius: f32,
}

impl ZoneSpawn {
    /// Zone center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Full game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session timing
    pub session: SessionConfig,
    /// Hunting ground
    pub world: WorldConfig,
    /// Attack tuning
    pub attacks: AttackConfig,
    /// Scripted player
    pub autopilot: AutopilotConfig,
    /// Creatures to spawn
    pub creatures: Vec<CreatureSpawn>,
    /// Cover zones to place
    pub zones: Vec<ZoneSpawn>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            world: WorldConfig::default(),
            attacks: AttackConfig::default(),
            autopilot: AutopilotConfig::default(),
            creatures: vec![
                CreatureSpawn::of(CreatureKind::Raptor, -4.0, 2.0),
                CreatureSpawn::of(CreatureKind::Rex, 3.0, -1.0),
                CreatureSpawn::of(CreatureKind::Grazer, 0.0, 0.0),
                CreatureSpawn::of(CreatureKind::Grazer, 5.0, 3.0),
            ],
            zones: vec![
                ZoneSpawn {
                    tag: ZoneTag::Bush,
                    x: -4.0,
                    y: 2.0,
                    radius: 1.5,
                },
                ZoneSpawn {
                    tag: ZoneTag::Tree,
                    x: 4.0,
                    y: -2.0,
                    radius: 2.0,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Load configuration from the default file location.
    /// Returns default config if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if the file is missing or invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            },
        }
    }

    /// Load and validate configuration, failing on any problem.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Checks every value the simulation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.frame_rate == 0 {
            return Err(ConfigError::invalid("session.frame_rate", "must be at least 1"));
        }
        positive("session.duration_secs", self.session.duration_secs)?;
        positive("world.half_width", self.world.half_width)?;
        positive("world.half_height", self.world.half_height)?;
        non_negative("world.hit_clip_secs", self.world.hit_clip_secs)?;
        non_negative("world.death_clip_secs", self.world.death_clip_secs)?;
        positive("autopilot.attack_interval", self.autopilot.attack_interval)?;
        non_negative("autopilot.fire_hold_secs", self.autopilot.fire_hold_secs)?;
        non_negative("autopilot.aim_jitter", self.autopilot.aim_jitter)?;
        self.attacks.validate()?;

        for (i, spawn) in self.creatures.iter().enumerate() {
            let c = &spawn.creature;
            if c.health <= 0 {
                return Err(ConfigError::invalid(
                    format!("creatures[{i}].health"),
                    format!("must be positive, got {}", c.health),
                ));
            }
            non_negative(&format!("creatures[{i}].speed"), c.speed)?;
            non_negative(&format!("creatures[{i}].idle_wait"), c.idle_wait)?;
            positive(&format!("creatures[{i}].collider_radius"), c.collider_radius)?;
        }

        for (i, zone) in self.zones.iter().enumerate() {
            positive(&format!("zones[{i}].radius"), zone.radius)?;
        }
        Ok(())
    }

    /// Simulated seconds per frame.
    #[must_use]
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.session.frame_rate.max(1) as f32
    }

    /// Get the default configuration file path.
    fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be a non-negative number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.bounds(), WorldBounds::default());
        assert_eq!(config.creatures.len(), 4);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = GameConfig::default();
        config.session.seed = Some(1234);
        config.attacks.meteor_delay = 0.75;
        config.creatures[0].creature.health = 45;
        config.save_to(&path).expect("save");

        let loaded = GameConfig::try_load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[session]
duration_secs = 10.0

[[creatures]]
x = 1.0
y = -1.0
kind = "Rex"
health = 50
"#,
        )
        .expect("write");

        let config = GameConfig::try_load_from(&path).expect("load");
        assert_eq!(config.session.duration_secs, 10.0);
        assert_eq!(config.session.frame_rate, 60);
        assert_eq!(config.creatures.len(), 1);
        assert_eq!(config.creatures[0].creature.kind, CreatureKind::Rex);
        assert_eq!(config.creatures[0].creature.health, 50);
        assert_eq!(config.creatures[0].creature.speed, CreatureConfig::default().speed);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = GameConfig::load_from(dir.path().join("absent.toml"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "session = 3").expect("write");

        assert!(matches!(GameConfig::try_load_from(&path), Err(ConfigError::Parse(_))));
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn test_validation_names_field() {
        let mut config = GameConfig::default();
        config.creatures[2].creature.health = 0;
        let err = config.validate().expect_err("zero health");
        assert!(err.to_string().contains("creatures[2].health"));

        let mut config = GameConfig::default();
        config.session.frame_rate = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.zones[1].radius = -1.0;
        assert!(config.validate().is_err());
    }
}
