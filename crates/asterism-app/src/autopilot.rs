//! Scripted input for headless runs.
//!
//! The autopilot reads the latest snapshot and answers with player
//! commands: turn toward the nearest enemy, shoot when lined up, burn a
//! laser charge when something gets close.

use glam::Vec2;

use asterism_core::commands::PlayerCommand;
use asterism_core::enums::GamePhase;
use asterism_core::state::GameStateSnapshot;
use asterism_core::types::heading_deg;

/// Anything that turns snapshots into player input.
pub trait InputSource {
    fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand>;
}

/// Heading error, in degrees, under which the autopilot opens fire.
const FIRE_CONE_DEG: f32 = 10.0;
/// Heading error that maps to a full turn.
const FULL_TURN_DEG: f32 = 30.0;
const LASER_RANGE: f32 = 1.5;
const CRUISE_THRUST: f32 = 0.2;
const CRUISE_RANGE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Start a new game after a game over.
    pub restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { restart: true }
    }
}

impl InputSource for Autopilot {
    fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::MainMenu => return vec![PlayerCommand::StartGame],
            GamePhase::GameOver if self.restart => return vec![PlayerCommand::StartGame],
            GamePhase::GameOver => return Vec::new(),
            GamePhase::Active => {}
        }
        let Some(player) = snapshot.player.as_ref().filter(|p| p.alive) else {
            return Vec::new();
        };
        let Some(target) = nearest_enemy(snapshot, player.position) else {
            return vec![PlayerCommand::Steer {
                thrust: 0.0,
                turn: 0.0,
            }];
        };

        let offset = target - player.position;
        let error = wrap_degrees(heading_deg(offset) - player.rotation_deg);
        // Positive turn is clockwise, which lowers the heading.
        let turn = (-error / FULL_TURN_DEG).clamp(-1.0, 1.0);
        let thrust = if offset.length() > CRUISE_RANGE { CRUISE_THRUST } else { 0.0 };

        let mut commands = vec![PlayerCommand::Steer { thrust, turn }];
        if error.abs() < FIRE_CONE_DEG {
            commands.push(PlayerCommand::Fire);
        }
        if offset.length() < LASER_RANGE && player.laser_charges > 0 && !player.laser_active {
            commands.push(PlayerCommand::FireLaser);
        }
        commands
    }
}

fn nearest_enemy(snapshot: &GameStateSnapshot, from: Vec2) -> Option<Vec2> {
    snapshot
        .entities
        .iter()
        .filter(|entity| entity.kind.is_enemy())
        .map(|entity| entity.position)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

/// Map any angle onto `(-180, 180]`.
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
