//! Shared fixtures for unit tests.

use std::collections::VecDeque;

use hecs::World;

use asterism_core::constants::{DEFAULT_VIEWPORT_HALF_HEIGHT, DEFAULT_VIEWPORT_HALF_WIDTH};
use asterism_core::events::GameEvent;
use asterism_core::host::{FixedViewport, RandomSource};

use crate::boundary::BoundaryTracker;
use crate::context::SimContext;
use crate::notify::NotificationHub;
use crate::score::ScoreBoard;
use crate::world_setup::DefaultFactory;

/// Random source that replays queued values, then falls back to defaults.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f32>,
    ints: VecDeque<i32>,
    float_default: Option<f32>,
}

impl ScriptedRandom {
    pub fn floats(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.floats.extend(values);
        self
    }

    pub fn ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn float_default(mut self, value: f32) -> Self {
        self.float_default = Some(value);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, min: f32, _max: f32) -> f32 {
        self.floats
            .pop_front()
            .or(self.float_default)
            .unwrap_or(min)
    }

    fn uniform_int(&mut self, min: i32, _max: i32) -> i32 {
        self.ints.pop_front().unwrap_or(min)
    }
}

pub struct TestBed {
    pub world: World,
    pub factory: DefaultFactory,
    pub boundary: BoundaryTracker,
    pub hub: NotificationHub,
    pub score: ScoreBoard,
    pub rng: ScriptedRandom,
    pub events: Vec<GameEvent>,
}

impl TestBed {
    pub fn new(rng: ScriptedRandom) -> Self {
        let viewport = FixedViewport {
            half_width: DEFAULT_VIEWPORT_HALF_WIDTH,
            half_height: DEFAULT_VIEWPORT_HALF_HEIGHT,
        };
        Self {
            world: World::new(),
            factory: DefaultFactory,
            boundary: BoundaryTracker::new(&viewport),
            hub: NotificationHub::new(),
            score: ScoreBoard::default(),
            rng,
            events: Vec::new(),
        }
    }

    pub fn ctx(&mut self) -> SimContext<'_> {
        SimContext {
            world: &mut self.world,
            factory: &mut self.factory,
            boundary: &mut self.boundary,
            hub: &mut self.hub,
            score: &mut self.score,
            rng: &mut self.rng,
            events: &mut self.events,
        }
    }
}
