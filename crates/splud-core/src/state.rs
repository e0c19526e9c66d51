//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::Notification;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RunPhase,
    pub paused: bool,
    pub wave: WaveView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub inventory: Vec<WeaponSlotView>,
    pub progress: ProgressView,
    /// Notifications raised since the previous snapshot.
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    /// Milliseconds left in the combat phase (0 outside combat).
    pub remaining_ms: u64,
    pub spawn_interval_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub health: f64,
    pub max_health: f64,
    pub move_speed: f64,
    pub damage: f64,
    pub regen: f64,
    pub crit_chance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub velocity: Velocity,
}

/// An active projectile. Inactive pool slots are not reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: usize,
    pub weapon: WeaponKind,
    pub position: Position,
    pub velocity: Velocity,
    /// Rotation in radians (direction of travel).
    pub rotation: f64,
    pub tint: u32,
    pub damage_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponSlotView {
    pub weapon: WeaponKind,
    pub tier: u8,
    pub tier_name: String,
    pub tint: u32,
    pub damage_multiplier: f64,
    pub cooldown_ms: u64,
}

/// Score, ledger and level progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressView {
    pub score: u64,
    /// Spendable gold.
    pub gold: u64,
    /// Gold earned over the whole run.
    pub total_gold: u64,
    pub total_exp: u64,
    pub level: u32,
    /// Experience into the current level (`total_exp % exp_for_next_level`).
    pub exp_into_level: u64,
    pub exp_for_next_level: u64,
    pub enemies_killed: u32,
}
