//! Bounded weapon inventory.
//!
//! Capacity is a business rule: a full inventory refuses additions by
//! returning false, it is not an error.

use splud_core::constants::{MAX_WEAPONS, WEAPON_COOLDOWN_MS};
use splud_core::enums::WeaponKind;
use splud_core::tiers::{tier_info, MAX_TIER};

/// One equipped weapon with its own firing clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponSlot {
    pub weapon: WeaponKind,
    pub tier: u8,
    /// Simulation time of the last shot (ms).
    pub last_shot_ms: u64,
    pub cooldown_ms: u64,
}

impl WeaponSlot {
    pub fn new(weapon: WeaponKind, tier: u8) -> Self {
        Self {
            weapon,
            tier: tier.min(MAX_TIER),
            last_shot_ms: 0,
            cooldown_ms: WEAPON_COOLDOWN_MS,
        }
    }

    pub fn damage_multiplier(&self) -> f64 {
        tier_info(self.tier).multiplier
    }

    pub fn tint(&self) -> u32 {
        tier_info(self.tier).color
    }

    /// Whether the slot may fire at `now_ms`. Strictly greater than the
    /// cooldown, so a slot never fires twice within one cooldown.
    pub fn is_ready(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_shot_ms) > self.cooldown_ms
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<WeaponSlot>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_WEAPONS),
        }
    }

    /// Equip a weapon. Returns false without mutating when full.
    pub fn add_weapon(&mut self, weapon: WeaponKind, tier: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(WeaponSlot::new(weapon, tier));
        true
    }

    /// Raise a slot's tier by one. Returns false for an unknown slot or a
    /// slot already at the top tier. Does not check gold.
    pub fn upgrade(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) if s.tier < MAX_TIER => {
                s.tier += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_WEAPONS
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[WeaponSlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [WeaponSlot] {
        &mut self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&WeaponSlot> {
        self.slots.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_weapon_caps_at_four() {
        let mut inv = Inventory::new();
        for weapon in WeaponKind::ALL.iter().take(MAX_WEAPONS) {
            assert!(inv.add_weapon(*weapon, 0));
        }
        let before = inv.clone();
        assert!(!inv.add_weapon(WeaponKind::Wand01, 2));
        assert_eq!(inv, before, "Rejected add must not mutate");
        assert_eq!(inv.len(), MAX_WEAPONS);
    }

    #[test]
    fn test_upgrade_until_top_tier() {
        let mut inv = Inventory::new();
        inv.add_weapon(WeaponKind::Knife01, 0);
        for expected in 1..=MAX_TIER {
            assert!(inv.upgrade(0));
            assert_eq!(inv.get(0).unwrap().tier, expected);
        }
        assert!(!inv.upgrade(0));
        assert_eq!(inv.get(0).unwrap().tier, MAX_TIER);
        assert!(!inv.upgrade(3), "Empty slot index cannot be upgraded");
    }

    #[test]
    fn test_tier_clamped_on_insert() {
        let mut inv = Inventory::new();
        inv.add_weapon(WeaponKind::Bow02, 99);
        assert_eq!(inv.get(0).unwrap().tier, MAX_TIER);
    }

    #[test]
    fn test_slot_readiness_is_strict() {
        let slot = WeaponSlot::new(WeaponKind::Sword01, 0);
        assert!(!slot.is_ready(WEAPON_COOLDOWN_MS));
        assert!(slot.is_ready(WEAPON_COOLDOWN_MS + 1));
    }

    #[test]
    fn test_multiplier_follows_tier() {
        let mut inv = Inventory::new();
        inv.add_weapon(WeaponKind::Mace01, 0);
        let base = inv.get(0).unwrap().damage_multiplier();
        inv.upgrade(0);
        assert!(inv.get(0).unwrap().damage_multiplier() > base);
        assert_ne!(inv.get(0).unwrap().tint(), tier_info(0).color);
    }
}
