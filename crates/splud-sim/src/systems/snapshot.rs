//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use splud_core::components::*;
use splud_core::events::Notification;
use splud_core::state::*;
use splud_core::tiers::tier_info;
use splud_core::types::{Position, SimTime, Velocity};

use crate::inventory::Inventory;
use crate::pool::ProjectilePool;
use crate::progression::{ProgressionTracker, ScoreState};
use crate::wave::WaveController;

/// Everything the snapshot reads besides the world.
pub struct SnapshotSources<'a> {
    pub time: SimTime,
    pub paused: bool,
    pub wave: &'a WaveController,
    pub inventory: &'a Inventory,
    pub pool: &'a ProjectilePool,
    pub progression: &'a ProgressionTracker,
    pub score: &'a ScoreState,
}

pub fn build_snapshot(
    world: &World,
    sources: &SnapshotSources<'_>,
    notifications: Vec<Notification>,
) -> GameStateSnapshot {
    let ledger = sources.progression.ledger();

    GameStateSnapshot {
        time: sources.time,
        phase: sources.wave.run_phase(),
        paused: sources.paused,
        wave: WaveView {
            number: sources.wave.wave(),
            remaining_ms: sources.wave.remaining_ms(),
            spawn_interval_ms: sources.wave.spawn_interval_ms(),
        },
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(sources.pool),
        inventory: build_inventory(sources.inventory),
        progress: ProgressView {
            score: sources.score.score,
            gold: ledger.gold,
            total_gold: ledger.gold_earned,
            total_exp: ledger.total_exp,
            level: sources.progression.level(),
            exp_into_level: sources.progression.exp_into_level(),
            exp_for_next_level: sources.progression.exp_for_next_level(),
            enemies_killed: sources.score.enemies_killed,
        },
        notifications,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Velocity, &Health, &PlayerStats)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, health, stats))| PlayerView {
            position: *pos,
            velocity: *vel,
            health: health.current,
            max_health: health.max,
            move_speed: stats.move_speed,
            damage: stats.damage,
            regen: stats.regen,
            crit_chance: stats.crit_chance,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(u64, EnemyView)> = world
        .query::<(&Enemy, &Position, &Velocity)>()
        .iter()
        .map(|(_, (enemy, pos, vel))| {
            (
                enemy.spawn_seq,
                EnemyView {
                    position: *pos,
                    velocity: *vel,
                },
            )
        })
        .collect();
    // Spawn order keeps the output stable across runs.
    enemies.sort_by_key(|(seq, _)| *seq);
    enemies.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(pool: &ProjectilePool) -> Vec<ProjectileView> {
    pool.iter_active()
        .map(|(slot, p)| ProjectileView {
            slot,
            weapon: p.weapon,
            position: p.position,
            velocity: p.velocity,
            rotation: p.velocity.y.atan2(p.velocity.x),
            tint: p.tint,
            damage_multiplier: p.damage_multiplier,
        })
        .collect()
}

fn build_inventory(inventory: &Inventory) -> Vec<WeaponSlotView> {
    inventory
        .slots()
        .iter()
        .map(|slot| {
            let info = tier_info(slot.tier);
            WeaponSlotView {
                weapon: slot.weapon,
                tier: slot.tier,
                tier_name: info.name.to_string(),
                tint: info.color,
                damage_multiplier: info.multiplier,
                cooldown_ms: slot.cooldown_ms,
            }
        })
        .collect()
}
