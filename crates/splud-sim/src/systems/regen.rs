//! Passive health regeneration from the player's `regen` stat.

use hecs::World;

use splud_core::components::{Health, Player, PlayerStats};
use splud_core::constants::DT;
use splud_core::events::Notification;

pub fn run(world: &mut World, notifications: &mut Vec<Notification>) {
    for (_entity, (_player, stats, health)) in
        world.query_mut::<(&Player, &PlayerStats, &mut Health)>()
    {
        if stats.regen <= 0.0 || health.current <= 0.0 || health.current >= health.max {
            continue;
        }
        let before = health.current;
        health.current = (health.current + stats.regen * DT).min(health.max);
        // Only whole-point changes are worth telling the HUD about.
        if health.current.floor() != before.floor() {
            notifications.push(Notification::HpChanged {
                current: health.current,
                max: health.max,
            });
        }
    }
}
