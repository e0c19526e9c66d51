//! Simulation engine for SPLUD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod inventory;
pub mod pool;
pub mod progression;
pub mod shop;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::{CollisionMode, SimConfig, SimulationEngine};
pub use splud_core as core;
pub use systems::collision::OverlapEvent;
