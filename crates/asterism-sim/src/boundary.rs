//! Playfield boundary tracking.
//!
//! Keeps the list of pooled entities that should go home once they leave
//! the visible rectangle, wraps the player ship around the edges, and picks
//! spawn and aim points on the rectangle's perimeter.

use asterism_core::components::Transform;
use asterism_core::constants::{EDGE_COIN_FLIP, INNER_AIM_FRACTION};
use asterism_core::host::{RandomSource, Viewport};
use asterism_core::types::Extent;
use glam::Vec2;
use hecs::{Entity, World};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct BoundaryTracker {
    extent: Extent,
    tracked: Vec<Entity>,
    player: Option<Entity>,
}

impl BoundaryTracker {
    /// Measure the viewport once; the extent is fixed for the session.
    pub fn new(viewport: &dyn Viewport) -> Self {
        let half = viewport.current_extent();
        Self {
            extent: Extent::new(half.x, half.y),
            tracked: Vec::new(),
            player: None,
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Watch `entity`. Registering twice is a no-op.
    pub fn register(&mut self, entity: Entity) {
        if !self.tracked.contains(&entity) {
            self.tracked.push(entity);
        }
    }

    pub fn unregister(&mut self, entity: Entity) {
        self.tracked.retain(|&tracked| tracked != entity);
    }

    pub fn is_registered(&self, entity: Entity) -> bool {
        self.tracked.contains(&entity)
    }

    pub fn tracked(&self) -> usize {
        self.tracked.len()
    }

    /// The entity that wraps instead of leaving.
    pub fn register_player(&mut self, entity: Entity) {
        self.player = Some(entity);
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.extent.contains(position)
    }

    /// Collect every tracked entity now outside the rectangle and stop
    /// tracking it. Works on a copy of the list so the caller may register
    /// new entities while handling the result.
    pub fn scan(&mut self, world: &World) -> Vec<Entity> {
        let snapshot = self.tracked.clone();
        let mut exited = Vec::new();
        for entity in snapshot {
            let position = match world.get::<&Transform>(entity) {
                Ok(transform) => transform.position,
                Err(_) => {
                    trace!(?entity, "dropping despawned entity from boundary list");
                    self.unregister(entity);
                    continue;
                }
            };
            if self.extent.contains(position) {
                continue;
            }
            self.unregister(entity);
            exited.push(entity);
        }
        exited
    }

    /// Mirror each axis that lies past the edge. A corner exit flips both.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        let x = if self.extent.exceeds_x(position.x) {
            -position.x
        } else {
            position.x
        };
        let y = if self.extent.exceeds_y(position.y) {
            -position.y
        } else {
            position.y
        };
        Vec2::new(x, y)
    }

    /// Apply `wrap` to the registered player, if any.
    pub fn wrap_player(&self, world: &mut World) {
        let Some(player) = self.player else {
            return;
        };
        if let Ok(transform) = world.query_one_mut::<&mut Transform>(player) {
            transform.position = self.wrap(transform.position);
        }
    }

    /// A point on the perimeter of the full rectangle.
    pub fn random_edge_point(&self, rng: &mut dyn RandomSource) -> Vec2 {
        point_on_edge(self.extent.half, rng)
    }

    /// A point on the perimeter of the inner aiming rectangle.
    pub fn random_inner_point(&self, rng: &mut dyn RandomSource) -> Vec2 {
        point_on_edge(self.extent.scaled(INNER_AIM_FRACTION).half, rng)
    }

    pub fn clear(&mut self) {
        self.tracked.clear();
        self.player = None;
    }
}

/// Pick a side by coin flip, then a signed position along it.
fn point_on_edge(half: Vec2, rng: &mut dyn RandomSource) -> Vec2 {
    let horizontal = rng.uniform_int(0, 100) < EDGE_COIN_FLIP;
    let sign_x = if rng.uniform_int(0, 100) < EDGE_COIN_FLIP { -1.0 } else { 1.0 };
    let sign_y = if rng.uniform_int(0, 100) < EDGE_COIN_FLIP { -1.0 } else { 1.0 };

    let x = if horizontal {
        rng.uniform(0.0, half.x) * sign_x
    } else {
        half.x * sign_x
    };
    let y = if horizontal {
        half.y * sign_y
    } else {
        rng.uniform(0.0, half.y) * sign_y
    };
    Vec2::new(x, y)
}
