//! Session score.

use asterism_core::events::GameEvent;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
}

impl ScoreBoard {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add `points` and announce the new total.
    pub fn increase(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score = self.score.saturating_add(points);
        debug!(points, score = self.score, "score increased");
        events.push(GameEvent::ScoreChanged { score: self.score });
    }

    /// Back to zero, silently. A new session announces itself instead.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_emits_running_total() {
        let mut board = ScoreBoard::default();
        let mut events = Vec::new();
        board.increase(10, &mut events);
        board.increase(50, &mut events);
        assert_eq!(board.score(), 60);
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged { score: 10 },
                GameEvent::ScoreChanged { score: 60 },
            ]
        );
    }

    #[test]
    fn reset_is_silent() {
        let mut board = ScoreBoard::default();
        let mut events = Vec::new();
        board.increase(10, &mut events);
        events.clear();
        board.reset();
        assert_eq!(board.score(), 0);
        assert!(events.is_empty());
    }
}
