//! Targeting and firing: every ready weapon slot shoots at the closest enemy.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use splud_core::components::Enemy;
use splud_core::constants::PROJECTILE_SPEED;
use splud_core::types::{Position, Velocity};

use crate::inventory::Inventory;
use crate::pool::{Launch, ProjectilePool};

/// Per-tick firing tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireReport {
    pub fired: u32,
    /// Shots dropped because the pool was exhausted.
    pub skipped: u32,
}

/// Position of the live enemy closest to `from`. Equal distances go to the
/// earliest-spawned enemy so the choice doesn't depend on storage order.
pub fn closest_enemy(world: &World, from: &Position) -> Option<Position> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| (from.distance_squared_to(pos), enemy.spawn_seq, *pos))
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, _, pos)| pos)
}

/// Aim angle from the player: toward the closest enemy, or uniformly random
/// in [0, 2π) when the field is empty.
pub fn aim_angle(world: &World, player_pos: &Position, rng: &mut ChaCha8Rng) -> f64 {
    match closest_enemy(world, player_pos) {
        Some(target) => player_pos.angle_to(&target),
        None => rng.gen_range(0.0..std::f64::consts::TAU),
    }
}

/// Fire every slot whose cooldown has elapsed at `now_ms`.
pub fn run(
    world: &World,
    inventory: &mut Inventory,
    pool: &mut ProjectilePool,
    rng: &mut ChaCha8Rng,
    player_pos: Position,
    now_ms: u64,
) -> FireReport {
    let mut report = FireReport::default();

    for slot in inventory.slots_mut() {
        if !slot.is_ready(now_ms) {
            continue;
        }
        slot.last_shot_ms = now_ms;

        let angle = aim_angle(world, &player_pos, rng);
        let launch = Launch {
            weapon: slot.weapon,
            position: player_pos,
            velocity: Velocity::from_angle(angle, PROJECTILE_SPEED),
            damage_multiplier: slot.damage_multiplier(),
            tint: slot.tint(),
        };

        match pool.acquire(launch) {
            Some(index) => {
                tracing::trace!(slot = index, weapon = ?slot.weapon, angle, "projectile fired");
                report.fired += 1;
            }
            None => report.skipped += 1,
        }
    }

    report
}
