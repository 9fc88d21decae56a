//! Fundamental geometric and simulation types.
//!
//! Positions and directions are `glam::Vec2` in world units. The helpers here
//! are the only motion primitives the simulation uses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Half-size of the playfield rectangle, centered on the origin.
///
/// A point is inside while `-x <= p.x <= x` and `-y <= p.y <= y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub half: Vec2,
}

impl Extent {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half: Vec2::new(half_width, half_height),
        }
    }

    /// Whether `x` lies beyond the horizontal edges. Equality is inside.
    pub fn exceeds_x(&self, x: f32) -> bool {
        x > self.half.x || x < -self.half.x
    }

    /// Whether `y` lies beyond the vertical edges. Equality is inside.
    pub fn exceeds_y(&self, y: f32) -> bool {
        y > self.half.y || y < -self.half.y
    }

    pub fn contains(&self, position: Vec2) -> bool {
        !self.exceeds_x(position.x) && !self.exceeds_y(position.y)
    }

    /// The extent scaled about the origin (used for the inner aiming frame).
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            half: self.half * factor,
        }
    }
}

/// Rotate `v` counter-clockwise by `degrees`.
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Damped approach used for ships, asteroids and UFOs:
/// `lerp(position, position + direction, clamp(t, 0, 1))`.
///
/// Displacement per call is `direction * t`, never the full direction
/// unless `t >= 1`.
pub fn lerp_toward(position: Vec2, direction: Vec2, t: f32) -> Vec2 {
    position.lerp(position + direction, t.clamp(0.0, 1.0))
}

/// Move `current` toward `target` by at most `max_delta`, without overshoot.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + delta / distance * max_delta
}

/// Unit "up" vector of a body rotated by `rotation_deg` (0 = +Y).
pub fn up_vector(rotation_deg: f32) -> Vec2 {
    rotate_deg(Vec2::Y, rotation_deg)
}

/// Rotation whose `up_vector` points along `direction`. Zero maps to 0.
pub fn heading_deg(direction: Vec2) -> f32 {
    if direction == Vec2::ZERO {
        return 0.0;
    }
    (-direction.x).atan2(direction.y).to_degrees()
}
