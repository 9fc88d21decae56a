//! Borrowed view of everything a controller may touch during one call.

use hecs::World;

use asterism_core::events::GameEvent;
use asterism_core::host::RandomSource;

use crate::boundary::BoundaryTracker;
use crate::notify::NotificationHub;
use crate::score::ScoreBoard;
use crate::world_setup::EntityFactory;

/// Split borrows of the engine and the current session, so controllers can
/// lend, recycle and score without holding the engine itself.
pub struct SimContext<'a> {
    pub world: &'a mut World,
    pub factory: &'a mut dyn EntityFactory,
    pub boundary: &'a mut BoundaryTracker,
    pub hub: &'a mut NotificationHub,
    pub score: &'a mut ScoreBoard,
    pub rng: &'a mut dyn RandomSource,
    pub events: &'a mut Vec<GameEvent>,
}
