//! Player bullets: fired straight along the ship's heading.

use glam::Vec2;
use hecs::{Entity, World};

use asterism_core::components::Transform;
use asterism_core::enums::EntityKind;
use asterism_core::types::move_towards;

use crate::context::SimContext;
use crate::notify::Owner;
use crate::roster::Roster;

#[derive(Debug)]
pub struct BulletController {
    roster: Roster,
    speed: f32,
}

impl BulletController {
    pub fn new(speed: f32) -> Self {
        Self {
            roster: Roster::new(Owner::Bullets, &[EntityKind::Bullet]),
            speed,
        }
    }

    /// Lend a bullet at `origin` heading along `direction`.
    pub fn fire(&mut self, ctx: &mut SimContext, origin: Vec2, direction: Vec2) -> Entity {
        self.roster.activate(ctx, EntityKind::Bullet, origin, direction)
    }

    /// Move each bullet `speed * dt` along its direction, capped at the
    /// direction's own length.
    pub fn advance(&mut self, world: &mut World, dt: f32) {
        let max_delta = self.speed * dt;
        for (entity, tracked) in self.roster.iter() {
            if let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) {
                let target = transform.position + tracked.movement.direction;
                transform.position = move_towards(transform.position, target, max_delta);
            }
        }
    }

    /// The bullet struck `target`: recycle it and hand back the target so
    /// the caller can deliver the hit. `None` if the bullet was not live.
    pub fn on_hit(&mut self, ctx: &mut SimContext, bullet: Entity, target: Entity) -> Option<Entity> {
        self.roster.recycle(ctx, bullet)?;
        Some(target)
    }

    pub fn on_return(&mut self, ctx: &mut SimContext, bullet: Entity) -> bool {
        self.roster.recycle(ctx, bullet).is_some()
    }

    pub fn dispose(&mut self, ctx: &mut SimContext) {
        self.roster.dispose(ctx);
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedRandom, TestBed};

    #[test]
    fn bullet_flies_straight() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut bullets = BulletController::new(10.0);
        let b = bullets.fire(&mut bed.ctx(), Vec2::ZERO, Vec2::Y);
        bullets.advance(&mut bed.world, 0.05);
        let position = bed.world.get::<&Transform>(b).unwrap().position;
        assert!((position - Vec2::new(0.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn hit_recycles_once() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut bullets = BulletController::new(10.0);
        let target = bed.world.spawn((Transform::default(),));
        let b = bullets.fire(&mut bed.ctx(), Vec2::ZERO, Vec2::Y);
        assert_eq!(bullets.on_hit(&mut bed.ctx(), b, target), Some(target));
        assert_eq!(bullets.on_hit(&mut bed.ctx(), b, target), None);
        assert!(!bullets.on_return(&mut bed.ctx(), b));
        let pool = bullets.roster().pool(EntityKind::Bullet).unwrap();
        assert_eq!((pool.available(), pool.lent()), (1, 0));
    }

    #[test]
    fn dispose_despawns_everything() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut bullets = BulletController::new(10.0);
        let live = bullets.fire(&mut bed.ctx(), Vec2::ZERO, Vec2::Y);
        let parked = bullets.fire(&mut bed.ctx(), Vec2::ZERO, Vec2::Y);
        bullets.on_return(&mut bed.ctx(), parked);
        bullets.dispose(&mut bed.ctx());
        assert!(!bed.world.contains(live));
        assert!(!bed.world.contains(parked));
        assert!(bed.hub.is_empty());
        assert_eq!(bed.boundary.tracked(), 0);
        assert!(bullets.roster().is_empty());
    }
}
