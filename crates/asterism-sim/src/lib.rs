//! Simulation engine for ASTERISM.
//!
//! Owns the hecs world, the entity pools and the spawn controllers that lend
//! entities out and take them back. Completely headless; the host drives it
//! with a delta time and reports contacts.

pub mod boundary;
pub mod context;
pub mod controllers;
pub mod engine;
pub mod laser;
pub mod notify;
pub mod player;
pub mod pool;
pub mod roster;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod testing;
