//! ASTERISM - headless asteroid field runner.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use tracing_subscriber::EnvFilter;

use asterism_app::autopilot::Autopilot;
use asterism_app::game_loop::{spawn_game_loop, LoopOptions};
use asterism_core::config::GameConfig;
use asterism_core::constants::{DEFAULT_VIEWPORT_HALF_HEIGHT, DEFAULT_VIEWPORT_HALF_WIDTH};
use asterism_sim::SimConfig;

#[derive(Parser)]
#[command(name = "asterism")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game tuning file (JSON). Missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Pace ticks with the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Half-width of the playfield
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HALF_WIDTH)]
    half_width: f32,

    /// Half-height of the playfield
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HALF_HEIGHT)]
    half_height: f32,

    /// Stop at the first game over instead of starting again
    #[arg(long)]
    no_restart: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("invalid config file {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = SimConfig {
        seed: cli.seed,
        viewport: Vec2::new(cli.half_width, cli.half_height),
        game: load_config(cli.config.as_ref())?,
    };
    let options = LoopOptions {
        max_ticks: Some(cli.ticks),
        realtime: cli.realtime,
        autopilot: Some(Autopilot {
            restart: !cli.no_restart,
        }),
    };

    let (handle, join) = spawn_game_loop(config, options)?;
    let summary = join
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    let phase = handle.snapshot().map(|snapshot| snapshot.phase);

    println!("seed={}", cli.seed);
    println!("ticks={}", summary.ticks);
    println!("sessions={}", summary.sessions);
    println!("best_score={}", summary.best_score);
    println!("final_score={}", summary.final_score);
    println!("phase={phase:?}");
    Ok(())
}
