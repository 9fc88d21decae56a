//! Core types and definitions for the ASTERISM simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, configuration, constants
//! and the host collaborator traits. It has no dependency on the ECS or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod host;
pub mod state;
pub mod types;

pub use glam::Vec2;
