//! Entity factories for pooled and player entities.
//!
//! Pools never build entities themselves; they call an `EntityFactory`
//! the first time a kind runs dry. Everything a factory spawns starts
//! inactive until a controller places it.

use hecs::{Entity, World};

use asterism_core::components::{Body, Collider, Transform};
use asterism_core::constants::*;
use asterism_core::enums::{AsteroidTier, EntityKind};

/// Builds a fresh, inactive entity of the requested kind.
pub trait EntityFactory {
    fn create(&mut self, world: &mut World, kind: EntityKind) -> Entity;
}

/// Spawns the standard component bundle for each kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl EntityFactory for DefaultFactory {
    fn create(&mut self, world: &mut World, kind: EntityKind) -> Entity {
        world.spawn((
            Transform::default(),
            Body {
                kind,
                active: false,
            },
            Collider {
                radius: collider_radius(kind),
            },
        ))
    }
}

/// Contact radius for each kind of entity.
pub fn collider_radius(kind: EntityKind) -> f32 {
    match kind {
        EntityKind::Asteroid(AsteroidTier::Small) => RADIUS_ASTEROID_SMALL,
        EntityKind::Asteroid(AsteroidTier::Medium) => RADIUS_ASTEROID_MEDIUM,
        EntityKind::Asteroid(AsteroidTier::Large) => RADIUS_ASTEROID_LARGE,
        EntityKind::Ufo => RADIUS_UFO,
        EntityKind::Bullet => RADIUS_BULLET,
        EntityKind::Player => RADIUS_PLAYER,
    }
}

/// Build the player ship at the origin and mark it active.
pub fn spawn_player(world: &mut World, factory: &mut dyn EntityFactory) -> Entity {
    let entity = factory.create(world, EntityKind::Player);
    if let Ok((transform, body)) = world.query_one_mut::<(&mut Transform, &mut Body)>(entity) {
        *transform = Transform::default();
        body.active = true;
    }
    entity
}

/// Mark `entity` active at `transform`. Returns false if it has no body.
pub fn activate(world: &mut World, entity: Entity, transform: Transform) -> bool {
    match world.query_one_mut::<(&mut Transform, &mut Body)>(entity) {
        Ok((current, body)) => {
            *current = transform;
            body.active = true;
            true
        }
        Err(_) => false,
    }
}

/// Mark `entity` inactive, returning where it was.
pub fn deactivate(world: &mut World, entity: Entity) -> Option<Transform> {
    let (transform, body) = world
        .query_one_mut::<(&Transform, &mut Body)>(entity)
        .ok()?;
    body.active = false;
    Some(*transform)
}
