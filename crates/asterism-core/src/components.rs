//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in the simulation crate, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Placement in the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Heading in degrees, counter-clockwise, 0 = +Y.
    pub rotation_deg: f32,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation_deg: 0.0,
        }
    }
}

/// Identity and visibility of a pooled entity.
///
/// `active` is false while the entity sits in a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: EntityKind,
    pub active: bool,
}

/// Circle used by the host's contact detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}
