//! Wall clock for real-time hosts.

use std::time::{Duration, Instant};

use asterism_core::host::Clock;

/// Longest frame the clock will report, so a stall does not teleport
/// everything across the playfield.
const MAX_FRAME: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).min(MAX_FRAME);
        self.last = now;
        elapsed.as_secs_f32()
    }
}
