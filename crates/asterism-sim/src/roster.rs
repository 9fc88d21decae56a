//! Per-controller bookkeeping of lent entities.
//!
//! A `Roster` owns one pool per entity kind plus the set of entities it has
//! lent out. Every lend registers a boundary watch and a notification route;
//! every recycle undoes both before the handle goes back to its pool.

use std::collections::HashMap;

use glam::Vec2;
use hecs::Entity;
use tracing::{debug, warn};

use asterism_core::components::Transform;
use asterism_core::enums::EntityKind;
use asterism_core::events::GameEvent;
use asterism_core::state::PoolView;
use asterism_core::types::heading_deg;

use crate::context::SimContext;
use crate::notify::{NotificationHub, Owner, Subscription};
use crate::pool::{Pool, StableState};
use crate::world_setup::{activate, deactivate};

/// Per-entity motion owned by the controller, not the entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    pub direction: Vec2,
}

#[derive(Debug)]
pub struct Tracked {
    pub kind: EntityKind,
    pub movement: MovementState,
    subscription: Subscription,
}

/// What a recycled entity looked like when it left play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retired {
    pub kind: EntityKind,
    pub position: Vec2,
    pub movement: MovementState,
}

#[derive(Debug)]
pub struct Roster {
    owner: Owner,
    pools: Vec<(EntityKind, Pool<Entity>)>,
    live: HashMap<Entity, Tracked, StableState>,
}

impl Roster {
    pub fn new(owner: Owner, kinds: &[EntityKind]) -> Self {
        Self {
            owner,
            pools: kinds.iter().map(|&kind| (kind, Pool::new())).collect(),
            live: HashMap::default(),
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn pool(&self, kind: EntityKind) -> Option<&Pool<Entity>> {
        self.pools
            .iter()
            .find(|(pool_kind, _)| *pool_kind == kind)
            .map(|(_, pool)| pool)
    }

    fn pool_mut(&mut self, kind: EntityKind) -> &mut Pool<Entity> {
        let index = match self.pools.iter().position(|(pool_kind, _)| *pool_kind == kind) {
            Some(index) => index,
            None => {
                self.pools.push((kind, Pool::new()));
                self.pools.len() - 1
            }
        };
        &mut self.pools[index].1
    }

    /// Lend an entity of `kind`, place it and start tracking it.
    pub fn activate(
        &mut self,
        ctx: &mut SimContext,
        kind: EntityKind,
        position: Vec2,
        direction: Vec2,
    ) -> Entity {
        let factory = &mut *ctx.factory;
        let world = &mut *ctx.world;
        let entity = self
            .pool_mut(kind)
            .acquire(|| factory.create(world, kind));

        let transform = Transform {
            position,
            rotation_deg: heading_deg(direction),
        };
        if !activate(ctx.world, entity, transform) {
            warn!(?entity, ?kind, "lent entity has no body");
        }

        let subscription = ctx.hub.subscribe(entity, self.owner);
        let tracked = Tracked {
            kind,
            movement: MovementState { direction },
            subscription,
        };
        if self.live.insert(entity, tracked).is_some() {
            warn!(?entity, "entity was lent while already live");
        }
        ctx.boundary.register(entity);

        debug!(?entity, ?kind, x = position.x, y = position.y, "lent");
        ctx.events.push(GameEvent::Spawned {
            entity: entity.to_bits().get(),
            kind,
        });
        entity
    }

    /// Take `entity` out of play and back into its pool. Returns `None`,
    /// changing nothing, when this roster is not tracking it.
    pub fn recycle(&mut self, ctx: &mut SimContext, entity: Entity) -> Option<Retired> {
        let tracked = self.live.remove(&entity)?;
        ctx.hub.unsubscribe(tracked.subscription);
        ctx.boundary.unregister(entity);
        let position = deactivate(ctx.world, entity)
            .map(|transform| transform.position)
            .unwrap_or_default();
        self.pool_mut(tracked.kind).release(entity);

        debug!(?entity, kind = ?tracked.kind, "recycled");
        ctx.events.push(GameEvent::Recycled {
            entity: entity.to_bits().get(),
            kind: tracked.kind,
        });
        Some(Retired {
            kind: tracked.kind,
            position,
            movement: tracked.movement,
        })
    }

    /// Keep the return route for `entity` but stop delivering hits to it.
    pub fn silence_hits(&self, hub: &mut NotificationHub, entity: Entity) {
        if let Some(tracked) = self.live.get(&entity) {
            hub.unsubscribe_hit(&tracked.subscription);
        }
    }

    /// Drop every route and watch, then despawn every entity the pools
    /// ever created.
    pub fn dispose(&mut self, ctx: &mut SimContext) {
        for (entity, tracked) in self.live.drain() {
            ctx.hub.unsubscribe(tracked.subscription);
            ctx.boundary.unregister(entity);
        }
        let mut despawned = 0usize;
        for (_, pool) in &mut self.pools {
            for entity in pool.clear() {
                if ctx.world.despawn(entity).is_ok() {
                    despawned += 1;
                }
            }
        }
        debug!(owner = ?self.owner, despawned, "roster disposed");
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains_key(&entity)
    }

    pub fn get(&self, entity: Entity) -> Option<&Tracked> {
        self.live.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &Tracked)> {
        self.live.iter().map(|(&entity, tracked)| (entity, tracked))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut Tracked)> {
        self.live.iter_mut().map(|(&entity, tracked)| (entity, tracked))
    }

    pub fn pool_views(&self) -> impl Iterator<Item = PoolView> + '_ {
        self.pools.iter().map(|(kind, pool)| PoolView {
            kind: *kind,
            available: pool.available(),
            lent: pool.lent(),
            total_created: pool.total_created(),
        })
    }
}
