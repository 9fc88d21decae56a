//! Asteroid field: three tiers, straight-line drift, splitting on hit.

use glam::Vec2;

use asterism_core::constants::{FRAGMENT_DEFLECTION_DEG, TIER_ROLL_MAX};
use asterism_core::enums::{AsteroidTier, EntityKind};
use asterism_core::events::GameEvent;
use asterism_core::host::RandomSource;
use asterism_core::types::rotate_deg;

use crate::boundary::BoundaryTracker;
use crate::notify::Owner;
use crate::roster::Retired;

use super::spawner::SpawnBehavior;

const ASTEROID_KINDS: [EntityKind; 3] = [
    EntityKind::Asteroid(AsteroidTier::Small),
    EntityKind::Asteroid(AsteroidTier::Medium),
    EntityKind::Asteroid(AsteroidTier::Large),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AsteroidField;

impl SpawnBehavior for AsteroidField {
    const OWNER: Owner = Owner::Asteroids;

    fn kinds(&self) -> &'static [EntityKind] {
        &ASTEROID_KINDS
    }

    fn pick_kind(&self, rng: &mut dyn RandomSource) -> EntityKind {
        EntityKind::Asteroid(AsteroidTier::from_roll(rng.uniform_int(0, TIER_ROLL_MAX)))
    }

    /// Aim at a point on the inner rectangle. The normalized heading is
    /// scaled by `speed` here and again by the per-tick step.
    fn initial_direction(
        &self,
        origin: Vec2,
        speed: f32,
        boundary: &BoundaryTracker,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let aim = boundary.random_inner_point(rng);
        (aim - origin).normalize_or_zero() * speed
    }

    /// Two fragments of the next tier down, deflected -30° then +30°.
    fn fragments(&self, retired: &Retired) -> Vec<(EntityKind, Vec2)> {
        let EntityKind::Asteroid(tier) = retired.kind else {
            return Vec::new();
        };
        let Some(fragment) = tier.fragment() else {
            return Vec::new();
        };
        let direction = retired.movement.direction;
        [-FRAGMENT_DEFLECTION_DEG, FRAGMENT_DEFLECTION_DEG]
            .into_iter()
            .map(|angle| (EntityKind::Asteroid(fragment), rotate_deg(direction, angle)))
            .collect()
    }

    fn split_event(
        &self,
        retired: &Retired,
        pieces: &[(EntityKind, Vec2)],
    ) -> Option<GameEvent> {
        let (EntityKind::Asteroid(fragment), _) = pieces.first()? else {
            return None;
        };
        Some(GameEvent::AsteroidSplit {
            position: retired.position,
            fragment: *fragment,
            count: pieces.len() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::spawner::SpawnController;
    use crate::testing::{ScriptedRandom, TestBed};
    use asterism_core::components::{Body, Transform};

    fn field() -> SpawnController<AsteroidField> {
        SpawnController::new(AsteroidField, 0.5, [1.0, 3.0], 10)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn roll_picks_tier() {
        let mut rng = ScriptedRandom::default().ints([0, 32, 33, 65, 66, 99]);
        let picks: Vec<_> = (0..6).map(|_| AsteroidField.pick_kind(&mut rng)).collect();
        use AsteroidTier::*;
        let expected: Vec<_> = [Small, Small, Medium, Medium, Large, Large]
            .into_iter()
            .map(EntityKind::Asteroid)
            .collect();
        assert_eq!(picks, expected);
    }

    #[test]
    fn spawn_aims_inward_at_speed() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut field = field();
        let e = field.tick(&mut bed.ctx(), 0.016).unwrap();
        let tracked = field.roster().get(e).unwrap();
        assert!((tracked.movement.direction.length() - 0.5).abs() < 1e-5);

        let origin = bed.world.get::<&Transform>(e).unwrap().position;
        assert!(!bed.boundary.extent().scaled(0.99).contains(origin));
        // Heading carries the spawn point toward the middle.
        assert!((origin + tracked.movement.direction).length() < origin.length());
    }

    #[test]
    fn large_splits_into_two_medium() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut field = field();
        let large = EntityKind::Asteroid(AsteroidTier::Large);
        let direction = Vec2::new(0.5, 0.0);
        let e = field.spawn_at(&mut bed.ctx(), large, Vec2::new(1.0, 1.0), direction);
        bed.events.clear();

        let outcome = field.on_hit(&mut bed.ctx(), e).unwrap();
        assert_eq!(outcome.fragments.len(), 2);
        assert_eq!(bed.score.score(), 10);
        assert!(!bed.world.get::<&Body>(e).unwrap().active);

        let medium = EntityKind::Asteroid(AsteroidTier::Medium);
        let expected = [rotate_deg(direction, -30.0), rotate_deg(direction, 30.0)];
        for (fragment, want) in outcome.fragments.iter().zip(expected) {
            let tracked = field.roster().get(*fragment).unwrap();
            assert_eq!(tracked.kind, medium);
            assert!(approx(tracked.movement.direction, want));
            let position = bed.world.get::<&Transform>(*fragment).unwrap().position;
            assert_eq!(position, Vec2::new(1.0, 1.0));
        }

        assert_eq!(bed.events[1], GameEvent::ScoreChanged { score: 10 });
        assert!(bed.events.contains(&GameEvent::AsteroidSplit {
            position: Vec2::new(1.0, 1.0),
            fragment: AsteroidTier::Medium,
            count: 2,
        }));
    }

    #[test]
    fn small_leaves_nothing() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut field = field();
        let small = EntityKind::Asteroid(AsteroidTier::Small);
        let e = field.spawn_at(&mut bed.ctx(), small, Vec2::ZERO, Vec2::X);
        let outcome = field.on_hit(&mut bed.ctx(), e).unwrap();
        assert!(outcome.fragments.is_empty());
        assert!(field.roster().is_empty());
        assert_eq!(bed.score.score(), 10);
        assert!(!bed
            .events
            .iter()
            .any(|event| matches!(event, GameEvent::AsteroidSplit { .. })));
    }

    #[test]
    fn second_hit_is_ignored() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut field = field();
        let small = EntityKind::Asteroid(AsteroidTier::Small);
        let e = field.spawn_at(&mut bed.ctx(), small, Vec2::ZERO, Vec2::X);
        assert!(field.on_hit(&mut bed.ctx(), e).is_some());
        assert!(field.on_hit(&mut bed.ctx(), e).is_none());
        assert_eq!(bed.score.score(), 10);
        let pool = field.roster().pool(small).unwrap();
        assert_eq!(pool.available(), 1);
        assert_eq!(pool.lent(), 0);
    }

    #[test]
    fn fragments_reuse_pooled_entities() {
        let mut bed = TestBed::new(ScriptedRandom::default());
        let mut field = field();
        let medium = EntityKind::Asteroid(AsteroidTier::Medium);
        let small = EntityKind::Asteroid(AsteroidTier::Small);

        // Park two smalls in the pool first.
        let a = field.spawn_at(&mut bed.ctx(), small, Vec2::ZERO, Vec2::X);
        let b = field.spawn_at(&mut bed.ctx(), small, Vec2::ZERO, Vec2::X);
        field.on_return(&mut bed.ctx(), a);
        field.on_return(&mut bed.ctx(), b);

        let m = field.spawn_at(&mut bed.ctx(), medium, Vec2::ZERO, Vec2::X);
        let outcome = field.on_hit(&mut bed.ctx(), m).unwrap();
        let mut reused = outcome.fragments.clone();
        reused.sort_by_key(|e| e.to_bits());
        let mut parked = vec![a, b];
        parked.sort_by_key(|e| e.to_bits());
        assert_eq!(reused, parked);
        assert_eq!(field.roster().pool(small).unwrap().total_created(), 2);
    }
}
