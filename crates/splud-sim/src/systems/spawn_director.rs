//! Spawn director: places enemies on a ring around the player.
//!
//! Enemies are aimed at the player's position at spawn time and never
//! re-aimed, so a moving player can sidestep them.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use splud_core::constants::{ENEMY_BASE_SPEED, ENEMY_SPEED_PER_SCORE, SPAWN_DISTANCE};
use splud_core::enums::Difficulty;
use splud_core::types::{Position, Velocity};

use crate::world_setup;

/// Enemy speed for the current score and difficulty.
pub fn enemy_speed(score: u64, difficulty: Difficulty) -> f64 {
    (ENEMY_BASE_SPEED + score as f64 * ENEMY_SPEED_PER_SCORE) * difficulty.speed_multiplier()
}

/// Spawn one enemy `SPAWN_DISTANCE` away from the player at a random angle.
pub fn spawn_one(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_pos: Position,
    score: u64,
    difficulty: Difficulty,
    spawn_seq: u64,
) -> hecs::Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = player_pos.offset(angle, SPAWN_DISTANCE);
    let heading = position.angle_to(&player_pos);
    let velocity = Velocity::from_angle(heading, enemy_speed(score, difficulty));
    world_setup::spawn_enemy(world, position, velocity, spawn_seq)
}

/// Spawn `count` enemies, advancing the run's spawn sequence.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: u32,
    player_pos: Position,
    score: u64,
    difficulty: Difficulty,
    next_spawn_seq: &mut u64,
) {
    for _ in 0..count {
        spawn_one(world, rng, player_pos, score, difficulty, *next_spawn_seq);
        *next_spawn_seq += 1;
    }
    if count > 0 {
        tracing::trace!(count, score, ?difficulty, "enemies spawned");
    }
}
