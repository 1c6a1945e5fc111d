//! # Dino Hunt
//!
//! Headless runner: loads the scene config, plays one match with the
//! scripted attacker and logs a summary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod autopilot;
mod config;
mod host;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dinohunt_gameplay::EffectKind;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::Simulation;
use crate::config::GameConfig;

/// Command line options. Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "dinohunt", version, about = "Run a headless Dino Hunt match")]
struct Args {
    /// Config file to load instead of dinohunt.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for creature wandering and the scripted player
    #[arg(short, long)]
    seed: Option<u64>,

    /// Match length in seconds
    #[arg(short, long)]
    duration: Option<f32>,

    /// Log gameplay details
    #[arg(short, long)]
    verbose: bool,

    /// Write the effective config to this path and exit
    #[arg(long)]
    save_config: Option<PathBuf>,
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "dinohunt=debug" } else { "dinohunt=info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    info!("Dino Hunt starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => GameConfig::try_load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GameConfig::load(),
    };
    if let Some(seed) = args.seed {
        config.session.seed = Some(seed);
    }
    if let Some(duration) = args.duration {
        config.session.duration_secs = duration;
    }
    config.validate().context("invalid configuration")?;

    if let Some(path) = &args.save_config {
        config.save_to(path)?;
        return Ok(());
    }

    let seed = config.session.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Seed: {seed}");

    let mut simulation = Simulation::new(&config, seed)?;
    let stats = simulation.run(config.frame_dt());

    info!(
        "Match over after {:.1}s ({} frames): {} attacks, {} meteors, {} hits, {} kills, {} survivors, {} effects",
        stats.elapsed,
        stats.frames,
        stats.launches,
        stats.meteors,
        stats.hits,
        stats.kills,
        stats.survivors,
        stats.effects
    );
    for kind in [EffectKind::Impact, EffectKind::Meteor, EffectKind::Fire] {
        info!("  {} effects: {}", kind.display_name(), simulation.effect_count(kind));
    }
    for creature in simulation.roster().iter() {
        info!(
            "  {} {} survived with {} health",
            creature.kind().display_name(),
            creature.id(),
            creature.health()
        );
    }
    Ok(())
}
