//! Fixed weapon tier table.
//!
//! A slot's tier indexes this table for its projectile tint and damage
//! multiplier. Enemies currently die in one hit, so the multiplier is
//! carried on projectiles but does not change lethality.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierInfo {
    pub name: &'static str,
    /// 0xRRGGBB tint.
    pub color: u32,
    pub multiplier: f64,
}

pub const WEAPON_TIERS: [TierInfo; 5] = [
    TierInfo {
        name: "Common",
        color: 0xFFFFFF,
        multiplier: 1.0,
    },
    TierInfo {
        name: "Uncommon",
        color: 0x00FF00,
        multiplier: 1.2,
    },
    TierInfo {
        name: "Rare",
        color: 0x3399FF,
        multiplier: 1.5,
    },
    TierInfo {
        name: "Epic",
        color: 0xAA00FF,
        multiplier: 2.0,
    },
    TierInfo {
        name: "Legendary",
        color: 0xFF9900,
        multiplier: 3.0,
    },
];

/// Highest tier index.
pub const MAX_TIER: u8 = (WEAPON_TIERS.len() - 1) as u8;

/// Look up a tier, saturating at the top of the table.
pub fn tier_info(tier: u8) -> &'static TierInfo {
    &WEAPON_TIERS[usize::from(tier.min(MAX_TIER))]
}
