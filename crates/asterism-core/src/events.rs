//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AsteroidTier, EntityKind};

/// Discrete notifications drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session began.
    SessionStarted,
    /// Score changed; carries the new total.
    ScoreChanged { score: u32 },
    /// An entity was taken from a pool and put into play.
    Spawned { entity: u64, kind: EntityKind },
    /// An entity was returned to its pool.
    Recycled { entity: u64, kind: EntityKind },
    /// An asteroid broke into fragments of `fragment` tier.
    AsteroidSplit {
        position: Vec2,
        fragment: AsteroidTier,
        count: u32,
    },
    /// The player fired the laser.
    LaserFired,
    /// Laser charges changed.
    LaserChargesChanged { charges: u32 },
    /// The player ship was destroyed.
    PlayerDestroyed,
}
