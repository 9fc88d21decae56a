//! Controllers that lend pooled entities and take them back.

pub mod asteroids;
pub mod bullets;
pub mod spawner;
pub mod ufos;

pub use asteroids::AsteroidField;
pub use bullets::BulletController;
pub use spawner::{HitOutcome, SpawnBehavior, SpawnController, SpawnTimer};
pub use ufos::UfoSquadron;
