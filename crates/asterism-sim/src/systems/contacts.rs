//! Contact detection for headless hosts.
//!
//! The engine never looks for overlaps itself; a host with a physics layer
//! reports contacts directly. Hosts without one can run these circle and
//! beam tests over the world and feed the results back through
//! `SimulationEngine::report_contact` and `report_laser_contact`.

use glam::Vec2;
use hecs::{Entity, World};

use asterism_core::components::{Body, Collider, Transform};
use asterism_core::enums::EntityKind;
use asterism_core::types::up_vector;

/// A `(source, other)` pair whose circles overlap. Sources are bullets and
/// the player ship; others are enemies.
pub type Contact = (Entity, Entity);

struct Circle {
    entity: Entity,
    kind: EntityKind,
    center: Vec2,
    radius: f32,
}

fn active_circles(world: &World) -> Vec<Circle> {
    let mut circles: Vec<Circle> = world
        .query::<(&Body, &Transform, &Collider)>()
        .iter()
        .filter(|(_, (body, _, _))| body.active)
        .map(|(entity, (body, transform, collider))| Circle {
            entity,
            kind: body.kind,
            center: transform.position,
            radius: collider.radius,
        })
        .collect();
    circles.sort_by_key(|circle| circle.entity.to_bits());
    circles
}

/// Every bullet-enemy and player-enemy overlap, in entity id order.
pub fn find_contacts(world: &World) -> Vec<Contact> {
    let circles = active_circles(world);
    let sources: Vec<&Circle> = circles
        .iter()
        .filter(|circle| matches!(circle.kind, EntityKind::Bullet | EntityKind::Player))
        .collect();
    let enemies: Vec<&Circle> = circles.iter().filter(|circle| circle.kind.is_enemy()).collect();

    let mut contacts = Vec::new();
    for source in &sources {
        for enemy in &enemies {
            let reach = source.radius + enemy.radius;
            if source.center.distance_squared(enemy.center) <= reach * reach {
                contacts.push((source.entity, enemy.entity));
            }
        }
    }
    contacts
}

/// Enemies touched by a beam of `length` from `origin` along the heading
/// `rotation_deg`.
pub fn find_beam_targets(world: &World, origin: Vec2, rotation_deg: f32, length: f32) -> Vec<Entity> {
    let end = origin + up_vector(rotation_deg) * length;
    active_circles(world)
        .into_iter()
        .filter(|circle| circle.kind.is_enemy())
        .filter(|circle| distance_to_segment(circle.center, origin, end) <= circle.radius)
        .map(|circle| circle.entity)
        .collect()
}

fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}
