//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use splud_core::components::*;
use splud_core::config::Settings;
use splud_core::constants::*;
use splud_core::types::{Position, Velocity};

/// Spawn the player at the world center with full health.
pub fn spawn_player(world: &mut World, settings: &Settings) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        Velocity::default(),
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        PlayerStats {
            move_speed: settings.player_speed,
            damage: 0.0,
            regen: 0.0,
            crit_chance: 0.0,
        },
    ))
}

/// Spawn an enemy with a fixed velocity.
pub fn spawn_enemy(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    spawn_seq: u64,
) -> hecs::Entity {
    world.spawn((
        Enemy {
            contact_damage: ENEMY_CONTACT_DAMAGE,
            spawn_seq,
        },
        position,
        velocity,
    ))
}
