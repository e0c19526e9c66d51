//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only work) plus whatever engine-owned state they touch. They do not
//! own state themselves.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod movement;
pub mod regen;
pub mod snapshot;
pub mod spawn_director;
pub mod targeting;

use hecs::World;

use splud_core::components::Player;
use splud_core::types::Position;

/// Current player position, or the origin if no player exists.
pub fn player_position(world: &World) -> Position {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
        .unwrap_or_default()
}
