//! Headless stand-ins for the input and shop collaborators.
//!
//! The input side wanders in 8 directions and turns back from the world
//! edges. The shop side spends gold greedily: one new weapon if there is room
//! and money, then upgrades on the lowest-tier slots.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use splud_core::commands::PlayerCommand;
use splud_core::constants::{MAX_WEAPONS, TICK_RATE, WORLD_HEIGHT, WORLD_WIDTH};
use splud_core::enums::WeaponKind;
use splud_core::state::GameStateSnapshot;
use splud_core::tiers::MAX_TIER;
use splud_core::types::MoveIntent;
use splud_sim::shop::{upgrade_price, weapon_price};

/// Ticks between heading changes.
const TURN_INTERVAL_TICKS: u32 = TICK_RATE;

/// Distance from an edge at which the wanderer turns inward.
const EDGE_MARGIN: f64 = 150.0;

pub struct Autopilot {
    rng: ChaCha8Rng,
    axes: (i8, i8),
    ticks_until_turn: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            axes: (0, 0),
            ticks_until_turn: 0,
        }
    }

    /// Next movement intent, or `None` when the current one still holds.
    pub fn steer(&mut self, snapshot: &GameStateSnapshot) -> Option<MoveIntent> {
        let mut axes = self.axes;
        if self.ticks_until_turn == 0 {
            axes = (self.rng.gen_range(-1..=1), self.rng.gen_range(-1..=1));
            self.ticks_until_turn = TURN_INTERVAL_TICKS;
        } else {
            self.ticks_until_turn -= 1;
        }

        let pos = snapshot.player.position;
        axes.0 = steer_axis(axes.0, pos.x, WORLD_WIDTH);
        axes.1 = steer_axis(axes.1, pos.y, WORLD_HEIGHT);

        if axes == self.axes {
            return None;
        }
        self.axes = axes;
        Some(MoveIntent::from_axes(axes.0, axes.1))
    }
}

fn steer_axis(axis: i8, coord: f64, extent: f64) -> i8 {
    if coord < EDGE_MARGIN {
        1
    } else if coord > extent - EDGE_MARGIN {
        -1
    } else {
        axis
    }
}

/// Purchases for one shop visit after `wave`, given the snapshot taken when
/// the shop opened. Does not include the `ContinueWave` that closes the shop.
pub fn plan_shop(snapshot: &GameStateSnapshot, wave: u32) -> Vec<PlayerCommand> {
    let mut gold = snapshot.progress.gold;
    let mut tiers: Vec<u8> = snapshot.inventory.iter().map(|slot| slot.tier).collect();
    let mut commands = Vec::new();

    let price = weapon_price(wave);
    if tiers.len() < MAX_WEAPONS && gold >= price {
        let weapon = WeaponKind::ALL[(wave as usize + tiers.len()) % WeaponKind::ALL.len()];
        commands.push(PlayerCommand::BuyWeapon { weapon });
        gold -= price;
        tiers.push(0);
    }

    while let Some((slot, tier)) = tiers
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, tier)| tier < MAX_TIER)
        .min_by_key(|&(_, tier)| tier)
    {
        let price = upgrade_price(tier);
        if gold < price {
            break;
        }
        commands.push(PlayerCommand::UpgradeWeapon { slot });
        gold -= price;
        tiers[slot] += 1;
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use splud_core::state::WeaponSlotView;
    use splud_core::types::Position;

    fn slot(weapon: WeaponKind, tier: u8) -> WeaponSlotView {
        WeaponSlotView {
            weapon,
            tier,
            tier_name: String::new(),
            tint: 0,
            damage_multiplier: 1.0,
            cooldown_ms: 1200,
        }
    }

    fn shop_snapshot(gold: u64, inventory: Vec<WeaponSlotView>) -> GameStateSnapshot {
        let mut snap = GameStateSnapshot::default();
        snap.progress.gold = gold;
        snap.inventory = inventory;
        snap
    }

    #[test]
    fn test_poor_player_buys_nothing() {
        let snap = shop_snapshot(5, vec![slot(WeaponKind::Sword01, 0)]);
        assert!(plan_shop(&snap, 1).is_empty());
    }

    #[test]
    fn test_buys_weapon_then_upgrades_lowest() {
        // 17 for a weapon after wave 1, 10 to lift it to tier 1, then 13 left
        // is short of the 20 a tier-1 upgrade costs.
        let snap = shop_snapshot(40, vec![slot(WeaponKind::Sword01, 1)]);
        let plan = plan_shop(&snap, 1);
        assert!(matches!(plan[0], PlayerCommand::BuyWeapon { .. }));
        assert_eq!(plan[1], PlayerCommand::UpgradeWeapon { slot: 1 });
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_full_inventory_only_upgrades() {
        let inventory = (0..MAX_WEAPONS)
            .map(|i| slot(WeaponKind::ALL[i], i as u8))
            .collect();
        let snap = shop_snapshot(30, inventory);
        let plan = plan_shop(&snap, 3);
        assert_eq!(
            plan,
            vec![
                PlayerCommand::UpgradeWeapon { slot: 0 },
                PlayerCommand::UpgradeWeapon { slot: 0 },
            ]
        );
    }

    #[test]
    fn test_never_upgrades_past_top_tier() {
        let inventory = (0..MAX_WEAPONS)
            .map(|i| slot(WeaponKind::ALL[i], MAX_TIER))
            .collect();
        let snap = shop_snapshot(10_000, inventory);
        assert!(plan_shop(&snap, 9).is_empty());
    }

    #[test]
    fn test_plan_never_overspends() {
        let snap = shop_snapshot(123, vec![slot(WeaponKind::Sword01, 0)]);
        let wave = 2;
        let mut tiers = vec![0u8];
        let mut spent = 0;
        for cmd in plan_shop(&snap, wave) {
            match cmd {
                PlayerCommand::BuyWeapon { .. } => {
                    spent += weapon_price(wave);
                    tiers.push(0);
                }
                PlayerCommand::UpgradeWeapon { slot } => {
                    spent += upgrade_price(tiers[slot]);
                    tiers[slot] += 1;
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
        assert!(spent <= 123);
    }

    #[test]
    fn test_steer_turns_away_from_edges() {
        let mut pilot = Autopilot::new(1);
        let mut snap = GameStateSnapshot::default();
        snap.player.position = Position::new(10.0, WORLD_HEIGHT - 10.0);

        let intent = pilot.steer(&snap).unwrap_or(MoveIntent::from_axes(0, 0));
        assert!(intent.x > 0.0);
        assert!(intent.y < 0.0);
    }

    #[test]
    fn test_steer_is_seeded() {
        let mut snap = GameStateSnapshot::default();
        snap.player.position = Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        let mut a = Autopilot::new(5);
        let mut b = Autopilot::new(5);
        for _ in 0..500 {
            assert_eq!(a.steer(&snap), b.steer(&snap));
        }
    }

    #[test]
    fn test_steer_holds_heading_between_turns() {
        let mut snap = GameStateSnapshot::default();
        snap.player.position = Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        let mut pilot = Autopilot::new(9);
        pilot.steer(&snap);
        for _ in 0..TURN_INTERVAL_TICKS {
            assert!(pilot.steer(&snap).is_none());
        }
    }
}
