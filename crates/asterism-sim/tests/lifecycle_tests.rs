use std::collections::HashSet;

use asterism_core::commands::PlayerCommand;
use asterism_core::components::{Body, Transform};
use asterism_core::events::GameEvent;
use asterism_core::state::GameStateSnapshot;
use asterism_sim::notify::Owner;
use asterism_sim::systems::contacts::{find_beam_targets, find_contacts};
use asterism_sim::{SimConfig, SimulationEngine};

const DT: f32 = 1.0 / 60.0;
const OWNERS: [Owner; 3] = [Owner::Asteroids, Owner::Ufos, Owner::Bullets];

/// Drive one tick the way a headless host would: steer, shoot, tick, then
/// report every overlap.
fn host_tick(engine: &mut SimulationEngine, tick: u32) -> GameStateSnapshot {
    if tick % 30 == 0 {
        engine.queue_command(PlayerCommand::Steer {
            thrust: 0.3,
            turn: if (tick / 90) % 2 == 0 { 0.6 } else { -0.6 },
        });
    }
    if tick % 8 == 0 {
        engine.queue_command(PlayerCommand::Fire);
    }
    if tick % 400 == 0 {
        engine.queue_command(PlayerCommand::FireLaser);
    }
    let snap = engine.tick(DT);

    for (source, other) in find_contacts(engine.world()) {
        engine.report_contact(source, other);
    }
    if engine.laser_emitted() {
        if let Some(player) = engine.player() {
            let transform = *engine.world().get::<&Transform>(player).unwrap();
            for target in find_beam_targets(engine.world(), transform.position, transform.rotation_deg, 20.0) {
                engine.report_laser_contact(target);
            }
        }
    }
    snap
}

fn assert_consistent(engine: &SimulationEngine) {
    let mut seen = HashSet::new();
    let mut live = 0;
    for owner in OWNERS {
        for entity in engine.live_entities(owner) {
            assert!(seen.insert(entity), "{entity:?} is live under two owners");
            let body = engine.world().get::<&Body>(entity).unwrap();
            assert!(body.active, "live entity {entity:?} is inactive");
            live += 1;
        }
    }
    assert_eq!(engine.route_count(), live, "routes and live entities disagree");

    let boundary = engine.boundary().unwrap();
    for entity in &seen {
        assert!(boundary.is_registered(*entity));
    }
    assert_eq!(boundary.tracked(), live);

    // Everything else the world holds is parked in a pool, except the ship.
    let inactive = engine
        .world()
        .query::<&Body>()
        .iter()
        .filter(|(entity, body)| !body.active && Some(*entity) != engine.player())
        .count();
    assert_eq!(engine.world().len() as usize, live + inactive + 1);
}

#[test]
fn long_session_keeps_books_balanced() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 2024,
        ..Default::default()
    })
    .unwrap();
    engine.queue_command(PlayerCommand::StartGame);

    let mut last_score = 0;
    for tick in 0..3600 {
        let snap = host_tick(&mut engine, tick);
        assert_consistent(&engine);

        for event in &snap.events {
            if let GameEvent::ScoreChanged { score } = event {
                assert!(*score > last_score, "score must only grow");
                last_score = *score;
            }
        }
        assert_eq!(snap.score, last_score);
    }
}

#[test]
fn pools_never_lend_the_same_entity_twice() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 77,
        ..Default::default()
    })
    .unwrap();
    engine.queue_command(PlayerCommand::StartGame);

    let mut lent = HashSet::new();
    for tick in 0..2400 {
        let snap = host_tick(&mut engine, tick);
        for event in &snap.events {
            match event {
                GameEvent::Spawned { entity, .. } => {
                    assert!(lent.insert(*entity), "entity {entity} lent while already out");
                }
                GameEvent::Recycled { entity, .. } => {
                    assert!(lent.remove(entity), "entity {entity} recycled but never lent");
                }
                _ => {}
            }
        }
    }
    let ids: HashSet<u64> = engine
        .live_entities(Owner::Asteroids)
        .into_iter()
        .chain(engine.live_entities(Owner::Ufos))
        .chain(engine.live_entities(Owner::Bullets))
        .map(|entity| entity.to_bits().get())
        .collect();
    assert_eq!(ids, lent);
}

#[test]
fn restarts_do_not_leak_entities() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    for round in 0..4 {
        engine.queue_command(PlayerCommand::StartGame);
        for tick in 0..900 {
            host_tick(&mut engine, tick);
        }
        assert_consistent(&engine);
        let peak = engine.world().len();
        assert!(peak < 400, "round {round}: {peak} entities is a leak");
    }
    engine.dispose();
    assert_eq!(engine.world().len(), 0);
    assert_eq!(engine.route_count(), 0);
}
