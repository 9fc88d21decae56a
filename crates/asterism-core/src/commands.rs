//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session, tearing down the previous one.
    StartGame,
    /// Set the steering axes. Thrust is clamped to `[0, 1]`,
    /// turn to `[-1, 1]` (positive turns clockwise). Persists until changed.
    Steer { thrust: f32, turn: f32 },
    /// Fire one bullet if the gun has cooled down.
    Fire,
    /// Fire the laser if a charge is available.
    FireLaser,
}
