//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the seeded RNG and the current
//! session (boundary tracker, notification hub and controllers). It
//! processes player commands, runs the per-tick update order and produces
//! `GameStateSnapshot`s. Completely headless, so it can be driven
//! deterministically from tests.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use asterism_core::commands::PlayerCommand;
use asterism_core::components::Body;
use asterism_core::config::GameConfig;
use asterism_core::constants::{DEFAULT_VIEWPORT_HALF_HEIGHT, DEFAULT_VIEWPORT_HALF_WIDTH};
use asterism_core::enums::{EntityKind, GamePhase};
use asterism_core::error::ConfigError;
use asterism_core::events::GameEvent;
use asterism_core::host::Viewport;
use asterism_core::state::GameStateSnapshot;
use asterism_core::types::SimTime;

use crate::boundary::BoundaryTracker;
use crate::context::SimContext;
use crate::controllers::{AsteroidField, BulletController, SpawnController, UfoSquadron};
use crate::laser::Laser;
use crate::notify::{NotificationHub, Owner, Topic};
use crate::player::PlayerShip;
use crate::score::ScoreBoard;
use crate::systems;
use crate::world_setup::{DefaultFactory, EntityFactory};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Half-width and half-height of the playfield.
    pub viewport: Vec2,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Vec2::new(DEFAULT_VIEWPORT_HALF_WIDTH, DEFAULT_VIEWPORT_HALF_HEIGHT),
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("viewport.x", self.viewport.x), ("viewport.y", self.viewport.y)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        self.game.validate()
    }
}

/// Controllers and ship state for one play session.
pub(crate) struct Units {
    pub(crate) player: PlayerShip,
    pub(crate) laser: Laser,
    pub(crate) asteroids: SpawnController<AsteroidField>,
    pub(crate) ufos: SpawnController<UfoSquadron>,
    pub(crate) bullets: BulletController,
}

impl Units {
    /// Hand an exited entity back to whoever lent it.
    fn deliver_return(&mut self, ctx: &mut SimContext, entity: Entity) {
        let taken = match ctx.hub.route(entity, Topic::Returned) {
            Some(Owner::Asteroids) => self.asteroids.on_return(ctx, entity),
            Some(Owner::Ufos) => self.ufos.on_return(ctx, entity),
            Some(Owner::Bullets) => self.bullets.on_return(ctx, entity),
            None => false,
        };
        if !taken {
            trace!(?entity, "return had no live owner");
        }
    }

    /// Deliver a hit to whoever lent `entity`. A struck bullet simply goes
    /// home; enemies are destroyed and scored.
    fn deliver_hit(&mut self, ctx: &mut SimContext, entity: Entity) {
        match ctx.hub.route(entity, Topic::Hit) {
            Some(Owner::Asteroids) => {
                self.asteroids.on_hit(ctx, entity);
            }
            Some(Owner::Ufos) => {
                self.ufos.on_hit(ctx, entity);
            }
            Some(Owner::Bullets) => {
                self.bullets.on_return(ctx, entity);
            }
            None => trace!(?entity, "hit had no live owner"),
        }
    }
}

pub(crate) struct Session {
    pub(crate) boundary: BoundaryTracker,
    pub(crate) hub: NotificationHub,
    pub(crate) units: Units,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: GameConfig,
    viewport: Box<dyn Viewport>,
    factory: Box<dyn EntityFactory>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    score: ScoreBoard,
    session: Option<Session>,
}

impl SimulationEngine {
    /// Create an engine with the default entity factory and a fixed
    /// viewport of `config.viewport`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let viewport = Box::new(config.viewport);
        Self::with_host(config, Box::new(DefaultFactory), viewport)
    }

    /// Create an engine with host-supplied collaborators.
    pub fn with_host(
        config: SimConfig,
        factory: Box<dyn EntityFactory>,
        viewport: Box<dyn Viewport>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.game,
            viewport,
            factory,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            score: ScoreBoard::default(),
            session: None,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. The world keeps moving after the player dies; only a new
    /// `StartGame` resets it.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.session.is_some() {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.score.score(),
            self.session.as_ref(),
            events,
        )
    }

    /// `source` touched `other`. Bullets destroy what they touch and go
    /// home; the player ship dies on contact with an enemy and takes the
    /// enemy with it. Anything else is ignored.
    pub fn report_contact(&mut self, source: Entity, other: Entity) {
        let (Some(source_kind), Some(other_kind)) = (self.active_kind(source), self.active_kind(other))
        else {
            return;
        };
        if !other_kind.is_enemy() {
            return;
        }
        let mut player_died = false;
        if let Some((mut ctx, units)) = self.parts() {
            match source_kind {
                EntityKind::Bullet => {
                    if let Some(target) = units.bullets.on_hit(&mut ctx, source, other) {
                        units.deliver_hit(&mut ctx, target);
                    }
                }
                EntityKind::Player if source == units.player.entity() => {
                    player_died = units.player.destroy(ctx.world, ctx.events);
                    units.deliver_hit(&mut ctx, other);
                }
                _ => {}
            }
        }
        if player_died {
            info!(score = self.score.score(), "game over");
            self.phase = GamePhase::GameOver;
        }
    }

    /// The laser beam touched `target`. Ignored unless a beam is out.
    pub fn report_laser_contact(&mut self, target: Entity) {
        if !self.active_kind(target).is_some_and(EntityKind::is_enemy) {
            return;
        }
        if let Some((mut ctx, units)) = self.parts() {
            if units.laser.is_emitted() {
                units.deliver_hit(&mut ctx, target);
            }
        }
    }

    /// Deliver a hit to `entity` through its notification route.
    pub fn hit(&mut self, entity: Entity) {
        if let Some((mut ctx, units)) = self.parts() {
            units.deliver_hit(&mut ctx, entity);
        }
    }

    /// Send `entity` back to its pool without scoring, as if it had left
    /// the playfield.
    pub fn return_to_pool(&mut self, entity: Entity) {
        if let Some((mut ctx, units)) = self.parts() {
            units.deliver_return(&mut ctx, entity);
        }
    }

    /// Lend an enemy at a chosen spot, bypassing the spawn timers.
    /// Returns `None` outside a session or for non-enemy kinds.
    pub fn spawn_at(&mut self, kind: EntityKind, position: Vec2, direction: Vec2) -> Option<Entity> {
        let (mut ctx, units) = self.parts()?;
        match kind {
            EntityKind::Asteroid(_) => Some(units.asteroids.spawn_at(&mut ctx, kind, position, direction)),
            EntityKind::Ufo => Some(units.ufos.spawn_at(&mut ctx, kind, position, direction)),
            EntityKind::Bullet | EntityKind::Player => None,
        }
    }

    /// End the current session, despawning everything it created.
    pub fn dispose(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        {
            let mut ctx = SimContext {
                world: &mut self.world,
                factory: &mut *self.factory,
                boundary: &mut session.boundary,
                hub: &mut session.hub,
                score: &mut self.score,
                rng: &mut self.rng,
                events: &mut self.events,
            };
            session.units.asteroids.dispose(&mut ctx);
            session.units.ufos.dispose(&mut ctx);
            session.units.bullets.dispose(&mut ctx);
        }
        session.boundary.clear();
        let player = session.units.player.entity();
        if self.world.despawn(player).is_err() {
            trace!(?player, "player already gone at dispose");
        }
        debug!(
            stale_routes = session.hub.len(),
            entities_left = self.world.len(),
            "session disposed"
        );
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Option<Entity> {
        self.session.as_ref().map(|s| s.units.player.entity())
    }

    pub fn laser_emitted(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.units.laser.is_emitted())
    }

    pub fn boundary(&self) -> Option<&BoundaryTracker> {
        self.session.as_ref().map(|s| &s.boundary)
    }

    /// Live notification routes in the current session.
    pub fn route_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.hub.len())
    }

    /// Entities currently lent out by `owner`.
    pub fn live_entities(&self, owner: Owner) -> Vec<Entity> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        let roster = match owner {
            Owner::Asteroids => session.units.asteroids.roster(),
            Owner::Ufos => session.units.ufos.roster(),
            Owner::Bullets => session.units.bullets.roster(),
        };
        let mut live: Vec<Entity> = roster.iter().map(|(entity, _)| entity).collect();
        live.sort_by_key(|entity| entity.to_bits());
        live
    }

    fn active_kind(&self, entity: Entity) -> Option<EntityKind> {
        let body = self.world.get::<&Body>(entity).ok()?;
        body.active.then_some(body.kind)
    }

    /// Split borrows of the engine and session for controller calls.
    fn parts(&mut self) -> Option<(SimContext<'_>, &mut Units)> {
        let session = self.session.as_mut()?;
        let ctx = SimContext {
            world: &mut self.world,
            factory: &mut *self.factory,
            boundary: &mut session.boundary,
            hub: &mut session.hub,
            score: &mut self.score,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        Some((ctx, &mut session.units))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => self.start_game(),
            PlayerCommand::Steer { thrust, turn } => {
                if let Some(session) = self.session.as_mut() {
                    session
                        .units
                        .player
                        .steer(thrust.clamp(0.0, 1.0), turn.clamp(-1.0, 1.0));
                }
            }
            PlayerCommand::Fire => {
                if let Some((mut ctx, units)) = self.parts() {
                    if let Some((origin, heading)) = units.player.try_fire(ctx.world) {
                        units.bullets.fire(&mut ctx, origin, heading);
                    }
                }
            }
            PlayerCommand::FireLaser => {
                if let Some((mut ctx, units)) = self.parts() {
                    if units.player.try_fire_laser(&mut units.laser, ctx.events) {
                        debug!(charges = units.player.laser_charges(), "laser fired");
                        ctx.events.push(GameEvent::LaserFired);
                    }
                }
            }
        }
    }

    /// Tear down any running session and start a fresh one.
    fn start_game(&mut self) {
        self.dispose();
        self.score.reset();

        let boundary_viewport: &dyn Viewport = self.viewport.as_ref();
        let mut boundary = BoundaryTracker::new(boundary_viewport);
        let player = PlayerShip::spawn(&mut self.world, &mut *self.factory, &self.config.player);
        boundary.register_player(player.entity());

        let gameplay = &self.config.gameplay;
        let units = Units {
            player,
            laser: Laser::new(self.config.player.laser_duration),
            asteroids: SpawnController::new(
                AsteroidField,
                gameplay.asteroid_speed,
                gameplay.asteroid_spawn_secs,
                gameplay.asteroid_reward,
            ),
            ufos: SpawnController::new(
                UfoSquadron,
                gameplay.ufo_speed,
                gameplay.ufo_spawn_secs,
                gameplay.ufo_reward,
            ),
            bullets: BulletController::new(gameplay.bullet_speed),
        };
        self.session = Some(Session {
            boundary,
            hub: NotificationHub::new(),
            units,
        });
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
        info!(extent = ?self.viewport.current_extent(), "session started");
        self.events.push(GameEvent::SessionStarted);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let Some((mut ctx, units)) = self.parts() else {
            return;
        };
        // 1. Player ship
        units
            .player
            .update(ctx.world, units.laser.is_emitted(), dt, ctx.events);
        // 2. Laser beam
        units.laser.tick(dt);
        // 3. UFOs home on the ship, dead or alive
        let target = units.player.position(ctx.world);
        units.ufos.tick(&mut ctx, dt);
        units.ufos.advance(ctx.world, dt, target);
        // 4. Asteroids
        units.asteroids.tick(&mut ctx, dt);
        units.asteroids.advance(ctx.world, dt, None);
        // 5. Bullets
        units.bullets.advance(ctx.world, dt);
        // 6. Boundary: exits go home, the ship wraps
        for entity in ctx.boundary.scan(ctx.world) {
            units.deliver_return(&mut ctx, entity);
        }
        ctx.boundary.wrap_player(ctx.world);
    }
}
