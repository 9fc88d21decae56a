//! ASTERISM headless host.
//!
//! Wires the simulation to a fixed-rate game loop thread, a wall clock, a
//! collision layer and a scripted input source.

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod game_loop;
pub mod state;
