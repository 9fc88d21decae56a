//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{TIER_MEDIUM_ROLL, TIER_SMALL_ROLL};

/// Asteroid size class. Larger tiers split into the next smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    pub const ALL: [AsteroidTier; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Numeric level: 0 small, 1 medium, 2 large.
    pub fn level(self) -> u8 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    /// Tier of the fragments produced when this asteroid is destroyed.
    pub fn fragment(self) -> Option<AsteroidTier> {
        match self {
            Self::Small => None,
            Self::Medium => Some(Self::Small),
            Self::Large => Some(Self::Medium),
        }
    }

    /// Map a uniform roll in `[0, 100)` onto a tier.
    pub fn from_roll(roll: i32) -> Self {
        if roll < TIER_SMALL_ROLL {
            Self::Small
        } else if roll < TIER_MEDIUM_ROLL {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// What an entity is. Carried alongside every handle so dispatch never
/// needs to guess the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "tier")]
pub enum EntityKind {
    Asteroid(AsteroidTier),
    Ufo,
    Bullet,
    Player,
}

impl EntityKind {
    /// Whether contact with the player ship is lethal.
    pub fn is_enemy(self) -> bool {
        matches!(self, Self::Asteroid(_) | Self::Ufo)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    GameOver,
}
