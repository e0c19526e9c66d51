//! Between-wave shop: pricing and purchase application.
//!
//! Purchases go through the public Inventory and ProgressionTracker
//! contracts. A refused purchase changes nothing.

use splud_core::constants::{UPGRADE_BASE_PRICE, WEAPON_BASE_PRICE, WEAPON_PRICE_PER_WAVE};
use splud_core::enums::{ShopRejection, WeaponKind};
use splud_core::tiers::MAX_TIER;

use crate::inventory::Inventory;
use crate::progression::ProgressionTracker;

/// Price of a new weapon during the shop that follows `wave`.
pub fn weapon_price(wave: u32) -> u64 {
    WEAPON_BASE_PRICE + WEAPON_PRICE_PER_WAVE * u64::from(wave)
}

/// Price of raising a weapon from `current_tier` to the next tier.
pub fn upgrade_price(current_tier: u8) -> u64 {
    UPGRADE_BASE_PRICE * (u64::from(current_tier) + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { weapon: WeaponKind, tier: u8, cost: u64 },
    Rejected(ShopRejection),
}

pub fn buy_weapon(
    inventory: &mut Inventory,
    progression: &mut ProgressionTracker,
    weapon: WeaponKind,
    wave: u32,
) -> PurchaseOutcome {
    if inventory.is_full() {
        return PurchaseOutcome::Rejected(ShopRejection::InventoryFull);
    }
    let cost = weapon_price(wave);
    if !progression.spend(cost) {
        return PurchaseOutcome::Rejected(ShopRejection::InsufficientGold);
    }
    inventory.add_weapon(weapon, 0);
    PurchaseOutcome::Purchased {
        weapon,
        tier: 0,
        cost,
    }
}

pub fn upgrade_weapon(
    inventory: &mut Inventory,
    progression: &mut ProgressionTracker,
    slot: usize,
) -> PurchaseOutcome {
    let Some(current) = inventory.get(slot) else {
        return PurchaseOutcome::Rejected(ShopRejection::InvalidSlot);
    };
    if current.tier >= MAX_TIER {
        return PurchaseOutcome::Rejected(ShopRejection::MaxTier);
    }
    let weapon = current.weapon;
    let cost = upgrade_price(current.tier);
    if !progression.spend(cost) {
        return PurchaseOutcome::Rejected(ShopRejection::InsufficientGold);
    }
    inventory.upgrade(slot);
    let tier = inventory.get(slot).map_or(MAX_TIER, |s| s.tier);
    PurchaseOutcome::Purchased { weapon, tier, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splud_core::constants::MAX_WEAPONS;

    fn rich(gold: u64) -> ProgressionTracker {
        let mut p = ProgressionTracker::new();
        p.apply_loot(0, gold);
        p
    }

    #[test]
    fn test_prices() {
        assert_eq!(weapon_price(1), 17);
        assert_eq!(weapon_price(5), 25);
        assert_eq!(upgrade_price(0), 10);
        assert_eq!(upgrade_price(3), 40);
    }

    #[test]
    fn test_buy_weapon_deducts_gold() {
        let mut inv = Inventory::new();
        let mut p = rich(20);
        let outcome = buy_weapon(&mut inv, &mut p, WeaponKind::Spear01, 1);
        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased {
                weapon: WeaponKind::Spear01,
                tier: 0,
                cost: 17
            }
        );
        assert_eq!(p.ledger().gold, 3);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_buy_weapon_short_on_gold() {
        let mut inv = Inventory::new();
        let mut p = rich(16);
        let outcome = buy_weapon(&mut inv, &mut p, WeaponKind::Spear01, 1);
        assert_eq!(
            outcome,
            PurchaseOutcome::Rejected(ShopRejection::InsufficientGold)
        );
        assert_eq!(p.ledger().gold, 16);
        assert!(inv.is_empty());
    }

    #[test]
    fn test_buy_weapon_full_inventory_keeps_gold() {
        let mut inv = Inventory::new();
        for _ in 0..MAX_WEAPONS {
            inv.add_weapon(WeaponKind::Club01, 0);
        }
        let mut p = rich(500);
        let outcome = buy_weapon(&mut inv, &mut p, WeaponKind::Wand01, 3);
        assert_eq!(outcome, PurchaseOutcome::Rejected(ShopRejection::InventoryFull));
        assert_eq!(p.ledger().gold, 500);
    }

    #[test]
    fn test_upgrade_weapon_paths() {
        let mut inv = Inventory::new();
        inv.add_weapon(WeaponKind::Hammer01, 0);
        let mut p = rich(1000);

        assert_eq!(
            upgrade_weapon(&mut inv, &mut p, 1),
            PurchaseOutcome::Rejected(ShopRejection::InvalidSlot)
        );

        let mut spent = 0;
        for tier in 0..MAX_TIER {
            match upgrade_weapon(&mut inv, &mut p, 0) {
                PurchaseOutcome::Purchased { tier: new, cost, .. } => {
                    assert_eq!(new, tier + 1);
                    spent += cost;
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(
            upgrade_weapon(&mut inv, &mut p, 0),
            PurchaseOutcome::Rejected(ShopRejection::MaxTier)
        );
        assert_eq!(p.ledger().gold, 1000 - spent);
    }
}
