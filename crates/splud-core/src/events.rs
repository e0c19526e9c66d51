//! Notifications emitted by the simulation for UI and audio feedback.
//!
//! One-way and fire-and-forget: the engine drains them into each snapshot
//! and never waits on a response.

use serde::{Deserialize, Serialize};

use crate::enums::{ShopRejection, WeaponKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    ScoreChanged {
        score: u64,
    },
    GoldChanged {
        gold: u64,
    },
    /// Experience into the current level and the current threshold.
    XpChanged {
        current: u64,
        max: u64,
    },
    LevelUp {
        level: u32,
    },
    HpChanged {
        current: f64,
        max: f64,
    },
    /// Whole seconds left in the combat phase (rounded up).
    WaveTimeChanged {
        secs_remaining: u64,
    },
    WaveNumberChanged {
        wave: u32,
    },
    /// Combat ended; the shop collaborator takes over.
    ShopOpened {
        wave: u32,
        gold: u64,
    },
    ShopPurchase {
        weapon: WeaponKind,
        tier: u8,
        cost: u64,
    },
    ShopRejected {
        reason: ShopRejection,
    },
    GameOver {
        score: u64,
        total_exp: u64,
        total_gold: u64,
    },
}
