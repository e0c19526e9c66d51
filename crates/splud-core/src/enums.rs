//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Difficulty selected in settings. Scales enemy speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Enemy speed multiplier for this difficulty.
    pub fn speed_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 0.7,
            Difficulty::Hard => 1.0,
        }
    }
}

/// The equippable weapons. All share the same cooldown; they differ in the
/// projectile they present to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Bow02,
    Club01,
    EnergySword01,
    Hammer01,
    Knife01,
    Mace01,
    Scimitar01,
    Scythe01,
    Shuriken01,
    Sling01,
    Spear01,
    Staff01,
    #[default]
    Sword01,
    ThrowingAxe01,
    Wand01,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 15] = [
        WeaponKind::Bow02,
        WeaponKind::Club01,
        WeaponKind::EnergySword01,
        WeaponKind::Hammer01,
        WeaponKind::Knife01,
        WeaponKind::Mace01,
        WeaponKind::Scimitar01,
        WeaponKind::Scythe01,
        WeaponKind::Shuriken01,
        WeaponKind::Sling01,
        WeaponKind::Spear01,
        WeaponKind::Staff01,
        WeaponKind::Sword01,
        WeaponKind::ThrowingAxe01,
        WeaponKind::Wand01,
    ];

    /// Display name for menus.
    pub fn display_name(self) -> &'static str {
        match self {
            WeaponKind::Bow02 => "Bow",
            WeaponKind::Club01 => "Club",
            WeaponKind::EnergySword01 => "Energy Sword",
            WeaponKind::Hammer01 => "Hammer",
            WeaponKind::Knife01 => "Knife",
            WeaponKind::Mace01 => "Flail",
            WeaponKind::Scimitar01 => "Scimitar",
            WeaponKind::Scythe01 => "Scythe",
            WeaponKind::Shuriken01 => "Shuriken",
            WeaponKind::Sling01 => "Sling",
            WeaponKind::Spear01 => "Spear",
            WeaponKind::Staff01 => "Staff",
            WeaponKind::Sword01 => "Sword",
            WeaponKind::ThrowingAxe01 => "Throwing Axe",
            WeaponKind::Wand01 => "Wand",
        }
    }
}

/// Run phase (top-level state of the wave state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    Combat,
    Shop,
    GameOver,
}

/// Why a shop request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopRejection {
    InsufficientGold,
    InventoryFull,
    InvalidSlot,
    MaxTier,
    ShopClosed,
}
