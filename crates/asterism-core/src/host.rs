//! Collaborator interfaces supplied by the host.
//!
//! The simulation never reads a wall clock, a screen or a global RNG; it
//! asks these traits instead, which keeps it deterministic under test.

use glam::Vec2;
use rand::Rng;

/// Elapsed time source, polled once per frame.
pub trait Clock {
    /// Seconds since the previous call.
    fn delta_time(&mut self) -> f32;
}

/// A clock that always reports the same step.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep(pub f32);

impl Clock for FixedStep {
    fn delta_time(&mut self) -> f32 {
        self.0
    }
}

/// Uniform random draws over half-open ranges.
///
/// A degenerate range (`max <= min`) yields `min`.
pub trait RandomSource {
    fn uniform(&mut self, min: f32, max: f32) -> f32;
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }
}

/// Visible playfield size, measured once per session.
pub trait Viewport {
    /// Half-width and half-height in world units.
    fn current_extent(&self) -> Vec2;
}

impl Viewport for Vec2 {
    fn current_extent(&self) -> Vec2 {
        *self
    }
}

/// A viewport with a fixed size, for headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    pub half_width: f32,
    pub half_height: f32,
}

impl Viewport for FixedViewport {
    fn current_extent(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}
