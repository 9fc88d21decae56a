//! Return-to-pool and hit notifications.
//!
//! Each live entity has exactly one route to the controller that lent it.
//! A subscription is the only way to remove that route, so the controller
//! that subscribed is the one that must unsubscribe.

use std::collections::HashMap;

use hecs::Entity;
use tracing::{trace, warn};

use crate::pool::StableState;

/// Controller that lent an entity out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Asteroids,
    Ufos,
    Bullets,
}

/// Notification kinds an entity can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// The entity left play and wants to go back to its pool.
    Returned,
    /// The entity was struck.
    Hit,
}

/// Proof of a live route. Not `Clone`: dropping it without calling
/// `NotificationHub::unsubscribe` leaks the route.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a dropped subscription leaves its route behind"]
pub struct Subscription {
    entity: Entity,
    owner: Owner,
}

impl Subscription {
    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }
}

#[derive(Debug, Clone, Copy)]
struct Route {
    owner: Owner,
    hit: bool,
}

#[derive(Debug, Default)]
pub struct NotificationHub {
    routes: HashMap<Entity, Route, StableState>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route both topics for `entity` to `owner`.
    pub fn subscribe(&mut self, entity: Entity, owner: Owner) -> Subscription {
        let route = Route { owner, hit: true };
        if let Some(previous) = self.routes.insert(entity, route) {
            warn!(?entity, previous = ?previous.owner, ?owner, "entity was already routed; replacing");
        }
        Subscription { entity, owner }
    }

    /// Remove the route. A route that was since taken over by another owner
    /// is left alone.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        match self.routes.get(&subscription.entity) {
            Some(route) if route.owner == subscription.owner => {
                self.routes.remove(&subscription.entity);
            }
            _ => trace!(entity = ?subscription.entity, "unsubscribe found no matching route"),
        }
    }

    /// Stop delivering hits while keeping the return route.
    pub fn unsubscribe_hit(&mut self, subscription: &Subscription) {
        if let Some(route) = self.routes.get_mut(&subscription.entity) {
            if route.owner == subscription.owner {
                route.hit = false;
            }
        }
    }

    /// Who should hear about `topic` on `entity`, if anyone.
    pub fn route(&self, entity: Entity, topic: Topic) -> Option<Owner> {
        let route = self.routes.get(&entity)?;
        match topic {
            Topic::Returned => Some(route.owner),
            Topic::Hit if route.hit => Some(route.owner),
            Topic::Hit => None,
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    fn two_entities() -> (World, Entity, Entity) {
        let mut world = World::new();
        let a = world.spawn((1u8,));
        let b = world.spawn((2u8,));
        (world, a, b)
    }

    #[test]
    fn routes_both_topics_to_owner() {
        let (_world, a, _) = two_entities();
        let mut hub = NotificationHub::new();
        let sub = hub.subscribe(a, Owner::Asteroids);
        assert_eq!(hub.route(a, Topic::Returned), Some(Owner::Asteroids));
        assert_eq!(hub.route(a, Topic::Hit), Some(Owner::Asteroids));
        hub.unsubscribe(sub);
        assert_eq!(hub.route(a, Topic::Returned), None);
        assert!(hub.is_empty());
    }

    #[test]
    fn unrouted_entity_has_no_owner() {
        let (_world, a, b) = two_entities();
        let mut hub = NotificationHub::new();
        let _sub = hub.subscribe(a, Owner::Ufos);
        assert_eq!(hub.route(b, Topic::Hit), None);
    }

    #[test]
    fn hit_can_be_silenced_separately() {
        let (_world, a, _) = two_entities();
        let mut hub = NotificationHub::new();
        let sub = hub.subscribe(a, Owner::Ufos);
        hub.unsubscribe_hit(&sub);
        assert_eq!(hub.route(a, Topic::Hit), None);
        assert_eq!(hub.route(a, Topic::Returned), Some(Owner::Ufos));
        hub.unsubscribe(sub);
        assert_eq!(hub.len(), 0);
    }

    #[test]
    fn stale_subscription_does_not_remove_new_owner() {
        let (_world, a, _) = two_entities();
        let mut hub = NotificationHub::new();
        let old = hub.subscribe(a, Owner::Bullets);
        let new = hub.subscribe(a, Owner::Asteroids);
        hub.unsubscribe(old);
        assert_eq!(hub.route(a, Topic::Returned), Some(Owner::Asteroids));
        hub.unsubscribe(new);
        assert!(hub.is_empty());
    }
}
