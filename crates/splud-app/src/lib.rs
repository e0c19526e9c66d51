//! SPLUD headless host.
//!
//! Wires the simulation to a game loop thread, a screen navigator and
//! scripted input/shop collaborators, so whole runs can be played and
//! logged without a renderer.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod state;

pub use splud_core as core;
