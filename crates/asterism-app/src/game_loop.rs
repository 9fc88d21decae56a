//! Game loop thread: runs the simulation engine at a fixed rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so it never has to cross a
//! thread boundary. Commands arrive via an `mpsc` channel. Each snapshot is
//! stored in shared state for polling, and score changes are logged.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use asterism_core::constants::{DT, TICK_RATE};
use asterism_core::events::GameEvent;
use asterism_core::host::{Clock, FixedStep};
use asterism_core::state::GameStateSnapshot;
use asterism_sim::{SimConfig, SimulationEngine};

use crate::autopilot::{Autopilot, InputSource};
use crate::clock::WallClock;
use crate::collision::report_contacts;
use crate::state::{LoopCommand, LoopHandle};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop paces itself and where its input comes from.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks and measure frames with the wall clock. When
    /// false, ticks run back to back with a fixed `DT`.
    pub realtime: bool,
    /// Drive the ship with the autopilot.
    pub autopilot: Option<Autopilot>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            realtime: true,
            autopilot: Some(Autopilot::default()),
        }
    }
}

/// What a finished loop reports back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub sessions: u32,
    pub best_score: u32,
    pub final_score: u32,
}

/// Spawns the game loop in a new thread.
///
/// Configuration is validated before the thread starts, so a bad config
/// fails here rather than inside the loop.
pub fn spawn_game_loop(
    config: SimConfig,
    options: LoopOptions,
) -> Result<(LoopHandle, JoinHandle<LoopSummary>)> {
    config.validate().context("rejected simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let join = std::thread::Builder::new()
        .name("asterism-game-loop".into())
        .spawn(move || run_game_loop(config, options, cmd_rx, &shared))
        .context("failed to spawn game loop thread")?;

    let handle = LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
    };
    Ok((handle, join))
}

/// The game loop. Runs until Shutdown, channel disconnect or `max_ticks`.
fn run_game_loop(
    config: SimConfig,
    mut options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut summary = LoopSummary::default();
    let mut engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!(%err, "engine refused its configuration");
            return summary;
        }
    };
    let mut clock: Box<dyn Clock> = if options.realtime {
        Box::new(WallClock::new())
    } else {
        Box::new(FixedStep(DT))
    };
    let mut next_tick_time = Instant::now();

    loop {
        if options.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return finish(summary, &engine),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return finish(summary, &engine),
            }
        }

        // 2. Scripted input reacts to the previous snapshot
        if let Some(pilot) = options.autopilot.as_mut() {
            let previous = latest_snapshot.lock().ok().and_then(|lock| lock.clone());
            let snapshot = previous.unwrap_or_default();
            engine.queue_commands(pilot.commands(&snapshot));
        }

        // 3. Advance one tick, then let the collision layer report contacts
        let mut snapshot = engine.tick(clock.delta_time());
        let contacts = report_contacts(&mut engine);
        if contacts.bodies + contacts.beam > 0 {
            debug!(?contacts, tick = snapshot.time.tick, "contacts reported");
        }
        summary.ticks += 1;

        // 4. Score sink
        for event in &snapshot.events {
            match event {
                GameEvent::SessionStarted => summary.sessions += 1,
                GameEvent::ScoreChanged { score } => {
                    info!(score, "score changed");
                    summary.best_score = summary.best_score.max(*score);
                }
                GameEvent::PlayerDestroyed => info!(score = snapshot.score, "ship lost"),
                _ => {}
            }
        }
        // Contacts reported after the tick change the score before the next
        // snapshot; keep the stored copy current.
        snapshot.score = engine.score();

        // 5. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
    finish(summary, &engine)
}

fn finish(mut summary: LoopSummary, engine: &SimulationEngine) -> LoopSummary {
    summary.final_score = engine.score();
    summary.best_score = summary.best_score.max(summary.final_score);
    info!(?summary, "game loop stopped");
    summary
}
