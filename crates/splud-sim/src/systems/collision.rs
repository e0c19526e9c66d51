//! Built-in overlap detection.
//!
//! Circle-vs-circle tests producing the same discrete events an external
//! physics collaborator would report. Projectile hits are listed before
//! player contacts; within each group, order follows world iteration.

use hecs::{Entity, World};

use splud_core::components::{Enemy, Player};
use splud_core::constants::{ENEMY_RADIUS, PLAYER_RADIUS, PROJECTILE_RADIUS};
use splud_core::types::Position;

use crate::pool::ProjectilePool;

/// A discrete overlap reported for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapEvent {
    /// Projectile pool slot `projectile` touched `enemy`.
    ProjectileEnemy { projectile: usize, enemy: Entity },
    /// `enemy` touched the player.
    EnemyPlayer { enemy: Entity },
}

/// Collect every projectile×enemy and enemy×player overlap.
pub fn detect(world: &World, pool: &ProjectilePool, events: &mut Vec<OverlapEvent>) {
    let enemies: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let hit_range_sq = (PROJECTILE_RADIUS + ENEMY_RADIUS).powi(2);
    for (index, projectile) in pool.iter_active() {
        for (entity, pos) in &enemies {
            if projectile.position.distance_squared_to(pos) <= hit_range_sq {
                events.push(OverlapEvent::ProjectileEnemy {
                    projectile: index,
                    enemy: *entity,
                });
            }
        }
    }

    let contact_range_sq = (PLAYER_RADIUS + ENEMY_RADIUS).powi(2);
    let players: Vec<Position> = world
        .query::<(&Player, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();
    for player_pos in &players {
        for (entity, pos) in &enemies {
            if player_pos.distance_squared_to(pos) <= contact_range_sq {
                events.push(OverlapEvent::EnemyPlayer { enemy: *entity });
            }
        }
    }
}
