//! Simulation constants and tuning defaults.
//!
//! Values that a host may want to tune live in `config`; these constants are
//! the defaults it falls back to plus the fixed rules of the game.

/// Nominal host tick rate (Hz). The core itself accepts any `dt`.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Playfield ---

/// Default half-width of the playfield (world units).
pub const DEFAULT_VIEWPORT_HALF_WIDTH: f32 = 8.9;

/// Default half-height of the playfield (world units).
pub const DEFAULT_VIEWPORT_HALF_HEIGHT: f32 = 5.0;

/// Asteroids aim at a point on this fraction of the playfield extent.
pub const INNER_AIM_FRACTION: f32 = 0.5;

/// Edge/sign selection threshold out of 100.
pub const EDGE_COIN_FLIP: i32 = 50;

// --- Asteroids ---

/// Rolls below this (out of 100) pick the small tier.
pub const TIER_SMALL_ROLL: i32 = 33;

/// Rolls below this (and at or above the small threshold) pick medium.
pub const TIER_MEDIUM_ROLL: i32 = 66;

/// Upper bound (exclusive) of the tier roll.
pub const TIER_ROLL_MAX: i32 = 100;

/// Deflection of each fragment from the parent's heading (degrees).
pub const FRAGMENT_DEFLECTION_DEG: f32 = 30.0;

pub const ASTEROID_SPEED: f32 = 0.5;
pub const ASTEROID_SPAWN_MIN_SECS: f32 = 1.0;
pub const ASTEROID_SPAWN_MAX_SECS: f32 = 3.0;
pub const ASTEROID_REWARD: u32 = 10;

// --- UFOs ---

pub const UFO_SPEED: f32 = 1.0;
pub const UFO_SPAWN_MIN_SECS: f32 = 5.0;
pub const UFO_SPAWN_MAX_SECS: f32 = 10.0;
pub const UFO_REWARD: u32 = 50;

// --- Bullets ---

/// Bullet speed (world units per second).
pub const BULLET_SPEED: f32 = 10.0;

// --- Player ---

/// Turn rate at full stick (degrees per second).
pub const PLAYER_SENSITIVITY: f32 = 180.0;
pub const PLAYER_SPEED: f32 = 1.0;
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.25;
pub const PLAYER_LASER_COUNT: u32 = 3;
pub const PLAYER_LASER_COOLDOWN: f32 = 5.0;
pub const PLAYER_LASER_DURATION: f32 = 0.5;

/// Distance ahead of the ship's center where bullets appear.
pub const PLAYER_MUZZLE_OFFSET: f32 = 0.5;

// --- Collider radii used by the default entity factory ---

pub const RADIUS_ASTEROID_SMALL: f32 = 0.25;
pub const RADIUS_ASTEROID_MEDIUM: f32 = 0.5;
pub const RADIUS_ASTEROID_LARGE: f32 = 0.9;
pub const RADIUS_UFO: f32 = 0.4;
pub const RADIUS_BULLET: f32 = 0.05;
pub const RADIUS_PLAYER: f32 = 0.3;
