//! Snapshot system: builds a complete `GameStateSnapshot` from the world
//! and the session's rosters.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use asterism_core::components::Transform;
use asterism_core::enums::GamePhase;
use asterism_core::events::GameEvent;
use asterism_core::state::*;
use asterism_core::types::SimTime;

use crate::engine::Session;
use crate::roster::Roster;

/// Build a complete snapshot. Entities are ordered by id so same-seed runs
/// serialize identically.
pub(crate) fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    score: u32,
    session: Option<&Session>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let Some(session) = session else {
        return GameStateSnapshot {
            time,
            phase,
            score,
            events,
            ..Default::default()
        };
    };
    let units = &session.units;
    let rosters = [
        units.asteroids.roster(),
        units.ufos.roster(),
        units.bullets.roster(),
    ];

    let mut entities: Vec<EntityView> = rosters
        .iter()
        .flat_map(|roster| build_entities(world, roster))
        .collect();
    entities.sort_by_key(|view| view.id);

    GameStateSnapshot {
        time,
        phase,
        score,
        player: Some(units.player.view(world, &units.laser)),
        entities,
        pools: rosters.iter().flat_map(|roster| roster.pool_views()).collect(),
        events,
    }
}

fn build_entities<'a>(world: &'a World, roster: &'a Roster) -> impl Iterator<Item = EntityView> + 'a {
    roster.iter().filter_map(move |(entity, tracked)| {
        let transform = world.get::<&Transform>(entity).ok()?;
        Some(EntityView {
            id: entity.to_bits().get(),
            kind: tracked.kind,
            position: transform.position,
            direction: tracked.movement.direction,
        })
    })
}
