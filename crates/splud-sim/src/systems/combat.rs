//! Combat resolution: applies overlap outcomes to the run.
//!
//! Events are processed in the order given. An event whose projectile was
//! already spent or whose enemy is already gone is skipped, so every enemy
//! is consumed by exactly one hit or contact. Once the run is over the rest
//! of the batch is ignored.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use splud_core::components::{Enemy, Health, Player, PlayerStats};
use splud_core::constants::*;
use splud_core::events::Notification;
use splud_core::types::Velocity;

use crate::pool::ProjectilePool;
use crate::progression::{ProgressionTracker, ScoreState};
use crate::systems::cleanup;
use crate::systems::collision::OverlapEvent;
use crate::wave::WaveController;

/// Engine state the resolver mutates.
pub struct CombatState<'a> {
    pub pool: &'a mut ProjectilePool,
    pub progression: &'a mut ProgressionTracker,
    pub score: &'a mut ScoreState,
    pub wave: &'a mut WaveController,
    pub rng: &'a mut ChaCha8Rng,
    pub notifications: &'a mut Vec<Notification>,
}

pub fn resolve(world: &mut World, events: &[OverlapEvent], state: &mut CombatState<'_>) {
    for event in events {
        if !state.wave.is_combat() {
            break;
        }
        match *event {
            OverlapEvent::ProjectileEnemy { projectile, enemy } => {
                if !state.pool.is_active(projectile) || !is_live_enemy(world, enemy) {
                    continue;
                }
                state.pool.release(projectile);
                if world.despawn(enemy).is_ok() {
                    award_kill(world, state);
                }
            }
            OverlapEvent::EnemyPlayer { enemy } => {
                let damage = match world.get::<&Enemy>(enemy) {
                    Ok(e) => e.contact_damage,
                    Err(_) => continue,
                };
                let _ = world.despawn(enemy);
                damage_player(world, damage, state);
            }
        }
    }
}

fn is_live_enemy(world: &World, entity: hecs::Entity) -> bool {
    world.get::<&Enemy>(entity).is_ok()
}

/// Roll and route kill rewards. Tier multiplier plays no part: every enemy
/// dies in one hit.
fn award_kill(world: &mut World, state: &mut CombatState<'_>) {
    let exp = state.rng.gen_range(KILL_EXP_MIN..=KILL_EXP_MAX);
    let gold = state.rng.gen_range(KILL_GOLD_MIN..=KILL_GOLD_MAX);
    state.progression.apply_loot(exp, gold);

    state.notifications.push(Notification::GoldChanged {
        gold: state.progression.ledger().gold,
    });
    state.notifications.push(Notification::XpChanged {
        current: state.progression.exp_into_level(),
        max: state.progression.exp_for_next_level(),
    });

    let reached = state.progression.check_level_up();
    grant_level_ups(world, &reached, state.notifications);

    state.score.score += KILL_SCORE;
    state.score.enemies_killed += 1;
    state.notifications.push(Notification::ScoreChanged {
        score: state.score.score,
    });
}

/// Apply the fixed per-level grant for each level reached.
pub fn grant_level_ups(world: &mut World, levels: &[u32], notifications: &mut Vec<Notification>) {
    for &level in levels {
        for (_entity, (_player, health, stats)) in
            world.query_mut::<(&Player, &mut Health, &mut PlayerStats)>()
        {
            health.current = (health.current + LEVEL_UP_HEAL).min(health.max);
            stats.move_speed += LEVEL_UP_SPEED_BONUS;
            notifications.push(Notification::LevelUp { level });
            notifications.push(Notification::HpChanged {
                current: health.current,
                max: health.max,
            });
        }
        tracing::debug!(level, "level up");
    }
}

fn damage_player(world: &mut World, damage: f64, state: &mut CombatState<'_>) {
    let mut died = false;
    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        health.current = (health.current - damage).max(0.0);
        state.notifications.push(Notification::HpChanged {
            current: health.current,
            max: health.max,
        });
        died |= health.current <= 0.0;
    }

    if !died {
        return;
    }

    let ledger = state.progression.ledger();
    let (score, total_exp, total_gold) = (state.score.score, ledger.total_exp, ledger.gold_earned);
    if state.wave.game_over(score, total_exp, total_gold) {
        cleanup::freeze_enemies(world);
        for (_entity, (_player, vel)) in world.query_mut::<(&Player, &mut Velocity)>() {
            *vel = Velocity::default();
        }
        state.notifications.push(Notification::GameOver {
            score,
            total_exp,
            total_gold,
        });
        tracing::info!(score, total_exp, total_gold, wave = state.wave.wave(), "game over");
    }
}
