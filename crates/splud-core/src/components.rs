//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Hit points. `current` stays within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Player stat block. Flat modifiers start at zero and are only changed by
/// level-up grants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Movement speed (units/s).
    pub move_speed: f64,
    /// Flat damage bonus.
    pub damage: f64,
    /// Health regenerated per second.
    pub regen: f64,
    /// Critical hit chance (0.0 - 1.0).
    pub crit_chance: f64,
}

/// A hostile chaser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Damage dealt to the player on contact.
    pub contact_damage: f64,
    /// Monotonic spawn order within a run. Breaks targeting ties.
    pub spawn_seq: u64,
}
