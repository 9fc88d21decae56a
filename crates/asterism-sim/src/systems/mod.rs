//! Read-only passes over the world.
//!
//! Each system is a plain function. None of them lend or recycle entities;
//! they produce data the engine or host acts on.

pub mod contacts;
pub mod snapshot;
