//! Core types and definitions for the SPLUD survival simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, settings, state snapshots, notifications, and
//! constants. It has no dependency on the engine or any host runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tiers;
pub mod types;
