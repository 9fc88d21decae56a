//! Player ship: thrust, rotation, bullet cadence and laser charges.
//!
//! The ship itself is not pooled. It is spawned once per session, wraps
//! around the playfield edges and is marked dead, not despawned, when hit.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use asterism_core::components::{Body, Transform};
use asterism_core::config::PlayerConfig;
use asterism_core::events::GameEvent;
use asterism_core::state::PlayerView;
use asterism_core::types::{lerp_toward, up_vector};

use crate::laser::Laser;
use crate::world_setup::{spawn_player, EntityFactory};

#[derive(Debug, Clone)]
pub struct PlayerShip {
    entity: Entity,
    config: PlayerConfig,
    /// Accumulated drift; thrust adds to it and nothing slows it down.
    velocity: Vec2,
    thrust: f32,
    turn: f32,
    alive: bool,
    fire_timer: f32,
    laser_charges: u32,
    laser_cooldown: f32,
}

impl PlayerShip {
    /// Spawn the ship at the origin with full laser charges.
    pub fn spawn(world: &mut World, factory: &mut dyn EntityFactory, config: &PlayerConfig) -> Self {
        let entity = spawn_player(world, factory);
        Self {
            entity,
            config: config.clone(),
            velocity: Vec2::ZERO,
            thrust: 0.0,
            turn: 0.0,
            alive: true,
            fire_timer: 0.0,
            laser_charges: config.laser_count,
            laser_cooldown: config.laser_cooldown,
        }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn laser_charges(&self) -> u32 {
        self.laser_charges
    }

    /// Held input until the next command.
    pub fn steer(&mut self, thrust: f32, turn: f32) {
        self.thrust = thrust;
        self.turn = turn;
    }

    /// Per-tick update: cooldowns, recharge, movement, then rotation.
    /// Cooldowns freeze while the laser is out.
    pub fn update(&mut self, world: &mut World, laser_emitted: bool, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.alive {
            return;
        }

        if self.fire_timer > 0.0 && !laser_emitted {
            self.fire_timer -= dt;
        }

        if self.laser_charges < self.config.laser_count && !laser_emitted {
            self.laser_cooldown -= dt;
            if self.laser_cooldown <= 0.0 {
                self.laser_charges += 1;
                self.laser_cooldown = self.config.laser_cooldown;
                debug!(charges = self.laser_charges, "laser recharged");
                events.push(GameEvent::LaserChargesChanged {
                    charges: self.laser_charges,
                });
            }
        }

        let Ok(transform) = world.query_one_mut::<&mut Transform>(self.entity) else {
            return;
        };
        if self.thrust != 0.0 {
            self.velocity += up_vector(transform.rotation_deg) * self.thrust * dt;
        }
        transform.position = lerp_toward(transform.position, self.velocity, self.config.speed * dt);
        transform.rotation_deg =
            (transform.rotation_deg - self.turn * self.config.sensitivity * dt).rem_euclid(360.0);
    }

    /// Start the bullet cooldown and return the muzzle point and heading,
    /// or `None` while cooling down or dead.
    pub fn try_fire(&mut self, world: &World) -> Option<(Vec2, Vec2)> {
        if !self.alive || self.fire_timer > 0.0 {
            return None;
        }
        let transform = *world.get::<&Transform>(self.entity).ok()?;
        self.fire_timer = self.config.fire_cooldown;
        let up = up_vector(transform.rotation_deg);
        Some((transform.position + up * self.config.muzzle_offset, up))
    }

    /// Spend a charge on the laser. False with no charges left, while dead,
    /// or while a beam is already out.
    pub fn try_fire_laser(&mut self, laser: &mut Laser, events: &mut Vec<GameEvent>) -> bool {
        if !self.alive || self.laser_charges == 0 || !laser.fire() {
            return false;
        }
        self.laser_charges -= 1;
        self.laser_cooldown = self.config.laser_cooldown;
        events.push(GameEvent::LaserChargesChanged {
            charges: self.laser_charges,
        });
        true
    }

    /// Mark the ship dead and hide it. False if it was already dead.
    pub fn destroy(&mut self, world: &mut World, events: &mut Vec<GameEvent>) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        if let Ok(body) = world.query_one_mut::<&mut Body>(self.entity) {
            body.active = false;
        }
        info!("player ship destroyed");
        events.push(GameEvent::PlayerDestroyed);
        true
    }

    /// Current position, dead or alive.
    pub fn position(&self, world: &World) -> Option<Vec2> {
        world
            .get::<&Transform>(self.entity)
            .ok()
            .map(|transform| transform.position)
    }

    pub fn view(&self, world: &World, laser: &Laser) -> PlayerView {
        let transform = world
            .get::<&Transform>(self.entity)
            .map(|transform| *transform)
            .unwrap_or_default();
        let recharging = self.laser_charges < self.config.laser_count;
        PlayerView {
            position: transform.position,
            rotation_deg: transform.rotation_deg,
            speed: self.velocity.length(),
            alive: self.alive,
            laser_charges: self.laser_charges,
            laser_cooldown_secs: if recharging { self.laser_cooldown.max(0.0) } else { 0.0 },
            laser_active: laser.is_emitted(),
        }
    }
}
