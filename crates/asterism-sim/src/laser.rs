//! Player laser: a timed beam that hits whatever it touches.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    duration: f32,
    remaining: f32,
    emitted: bool,
}

impl Laser {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
            emitted: false,
        }
    }

    /// Start the beam. False while a beam is already out.
    pub fn fire(&mut self) -> bool {
        if self.emitted {
            return false;
        }
        self.emitted = true;
        self.remaining = self.duration;
        true
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.emitted {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.emitted = false;
        }
    }

    pub fn is_emitted(&self) -> bool {
        self.emitted
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_lasts_its_duration() {
        let mut laser = Laser::new(0.5);
        assert!(laser.fire());
        assert!(!laser.fire());
        laser.tick(0.25);
        assert!(laser.is_emitted());
        laser.tick(0.25);
        assert!(!laser.is_emitted());
        assert!(laser.fire());
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut laser = Laser::new(0.5);
        laser.tick(1.0);
        assert!(!laser.is_emitted());
        assert_eq!(laser.remaining(), 0.0);
    }
}
