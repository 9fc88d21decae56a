//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Option<PlayerView>,
    /// Active pooled entities, ordered by entity id.
    pub entities: Vec<EntityView>,
    pub pools: Vec<PoolView>,
    pub events: Vec<GameEvent>,
}

/// A visible pooled entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec2,
    pub direction: Vec2,
}

/// Player ship readouts for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub speed: f32,
    pub alive: bool,
    pub laser_charges: u32,
    pub laser_cooldown_secs: f32,
    pub laser_active: bool,
}

/// Pool occupancy, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolView {
    pub kind: EntityKind,
    pub available: usize,
    pub lent: usize,
    pub total_created: usize,
}
