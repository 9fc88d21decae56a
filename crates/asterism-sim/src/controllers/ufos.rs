//! UFO squadron: homing saucers that curve toward the player.

use glam::Vec2;

use asterism_core::enums::EntityKind;
use asterism_core::host::RandomSource;

use crate::boundary::BoundaryTracker;
use crate::notify::Owner;

use super::spawner::SpawnBehavior;

const UFO_KINDS: [EntityKind; 1] = [EntityKind::Ufo];

#[derive(Debug, Clone, Copy, Default)]
pub struct UfoSquadron;

impl SpawnBehavior for UfoSquadron {
    const OWNER: Owner = Owner::Ufos;

    fn kinds(&self) -> &'static [EntityKind] {
        &UFO_KINDS
    }

    fn pick_kind(&self, _rng: &mut dyn RandomSource) -> EntityKind {
        EntityKind::Ufo
    }

    /// UFOs start at rest and pick up speed from steering.
    fn initial_direction(
        &self,
        _origin: Vec2,
        _speed: f32,
        _boundary: &BoundaryTracker,
        _rng: &mut dyn RandomSource,
    ) -> Vec2 {
        Vec2::ZERO
    }

    /// Accumulate a unit nudge toward the target, scaled by `dt`.
    fn steer(&self, direction: Vec2, position: Vec2, target: Option<Vec2>, dt: f32) -> Vec2 {
        match target {
            Some(target) => direction + (target - position).normalize_or_zero() * dt,
            None => direction,
        }
    }
}
