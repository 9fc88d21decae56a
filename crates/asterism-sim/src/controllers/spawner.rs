//! Timed spawning of pooled enemies.
//!
//! A `SpawnController` drives one `SpawnBehavior`: it counts down a
//! randomized timer, lends a new entity at a random edge point when the
//! timer fires, moves its live entities each tick and handles their hit
//! and return notifications.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, trace};

use asterism_core::components::Transform;
use asterism_core::enums::EntityKind;
use asterism_core::events::GameEvent;
use asterism_core::host::RandomSource;
use asterism_core::types::lerp_toward;

use crate::boundary::BoundaryTracker;
use crate::context::SimContext;
use crate::notify::Owner;
use crate::roster::{Retired, Roster};

/// Countdown to the next spawn.
///
/// Starts at zero, so the first tick is always due. After each spawn it is
/// re-armed with a uniform draw from `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    remaining: f32,
    range: [f32; 2],
}

impl SpawnTimer {
    pub fn new(range: [f32; 2]) -> Self {
        Self {
            remaining: 0.0,
            range,
        }
    }

    /// Count down by `dt`; true once the countdown has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }

    pub fn rearm(&mut self, rng: &mut dyn RandomSource) {
        self.remaining = rng.uniform(self.range[0], self.range[1]);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// What varies between spawners: which kinds, where they head, how they
/// steer and what they leave behind.
pub trait SpawnBehavior {
    const OWNER: Owner;

    /// Kinds this spawner pools.
    fn kinds(&self) -> &'static [EntityKind];

    /// Kind of the next spawn.
    fn pick_kind(&self, rng: &mut dyn RandomSource) -> EntityKind;

    /// Direction given to an entity lent at `origin`.
    fn initial_direction(
        &self,
        origin: Vec2,
        speed: f32,
        boundary: &BoundaryTracker,
        rng: &mut dyn RandomSource,
    ) -> Vec2;

    /// Per-tick direction update. Straight line by default.
    fn steer(&self, direction: Vec2, _position: Vec2, _target: Option<Vec2>, _dt: f32) -> Vec2 {
        direction
    }

    /// Entities to lend in place of one that was destroyed.
    fn fragments(&self, _retired: &Retired) -> Vec<(EntityKind, Vec2)> {
        Vec::new()
    }

    /// Event announcing the fragments lent for `retired`, if any.
    fn split_event(
        &self,
        _retired: &Retired,
        _pieces: &[(EntityKind, Vec2)],
    ) -> Option<GameEvent> {
        None
    }
}

/// Result of a delivered hit.
#[derive(Debug, Clone, PartialEq)]
pub struct HitOutcome {
    pub retired: Retired,
    pub fragments: Vec<Entity>,
}

#[derive(Debug)]
pub struct SpawnController<B> {
    behavior: B,
    roster: Roster,
    timer: SpawnTimer,
    speed: f32,
    reward: u32,
}

impl<B: SpawnBehavior> SpawnController<B> {
    pub fn new(behavior: B, speed: f32, spawn_secs: [f32; 2], reward: u32) -> Self {
        let roster = Roster::new(B::OWNER, behavior.kinds());
        Self {
            behavior,
            roster,
            timer: SpawnTimer::new(spawn_secs),
            speed,
            reward,
        }
    }

    /// Advance the spawn timer; lend one entity when it fires.
    pub fn tick(&mut self, ctx: &mut SimContext, dt: f32) -> Option<Entity> {
        if !self.timer.tick(dt) {
            return None;
        }
        let kind = self.behavior.pick_kind(ctx.rng);
        let origin = ctx.boundary.random_edge_point(ctx.rng);
        let direction = self
            .behavior
            .initial_direction(origin, self.speed, ctx.boundary, ctx.rng);
        let entity = self.roster.activate(ctx, kind, origin, direction);
        self.timer.rearm(ctx.rng);
        trace!(owner = ?B::OWNER, next_in = self.timer.remaining(), "spawn timer re-armed");
        Some(entity)
    }

    /// Steer and move every live entity. Never lends or recycles.
    pub fn advance(&mut self, world: &mut World, dt: f32, target: Option<Vec2>) {
        let step = self.speed * dt;
        for (entity, tracked) in self.roster.iter_mut() {
            let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) else {
                continue;
            };
            let direction =
                self.behavior
                    .steer(tracked.movement.direction, transform.position, target, dt);
            tracked.movement.direction = direction;
            transform.position = lerp_toward(transform.position, direction, step);
        }
    }

    /// Destroy `entity`: recycle it, award the reward, lend any fragments
    /// at its last position. Ignored unless `entity` is live here.
    pub fn on_hit(&mut self, ctx: &mut SimContext, entity: Entity) -> Option<HitOutcome> {
        if !self.roster.contains(entity) {
            trace!(?entity, owner = ?B::OWNER, "hit on entity that is not live");
            return None;
        }
        self.roster.silence_hits(ctx.hub, entity);
        let retired = self.roster.recycle(ctx, entity)?;
        ctx.score.increase(self.reward, ctx.events);

        let pieces = self.behavior.fragments(&retired);
        if let Some(event) = self.behavior.split_event(&retired, &pieces) {
            ctx.events.push(event);
        }
        let mut fragments = Vec::with_capacity(pieces.len());
        for (kind, direction) in pieces {
            fragments.push(self.roster.activate(ctx, kind, retired.position, direction));
        }

        debug!(?entity, kind = ?retired.kind, fragments = fragments.len(), "destroyed");
        Some(HitOutcome { retired, fragments })
    }

    /// Take back an entity that left the playfield.
    pub fn on_return(&mut self, ctx: &mut SimContext, entity: Entity) -> bool {
        self.roster.recycle(ctx, entity).is_some()
    }

    pub fn dispose(&mut self, ctx: &mut SimContext) {
        self.roster.dispose(ctx);
    }

    /// Lend an entity at a chosen spot, bypassing the timer.
    pub fn spawn_at(
        &mut self,
        ctx: &mut SimContext,
        kind: EntityKind,
        position: Vec2,
        direction: Vec2,
    ) -> Entity {
        self.roster.activate(ctx, kind, position, direction)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }
}
