//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Every body is then kept inside the world bounds. Enemies may spawn past an
//! edge on their ring; their first step pulls them onto it.

use glam::DVec2;
use hecs::World;

use splud_core::components::{Player, PlayerStats};
use splud_core::constants::{DT, PROJECTILE_MAX_RANGE, WORLD_HEIGHT, WORLD_WIDTH};
use splud_core::types::{MoveIntent, Position, Velocity};

use crate::pool::ProjectilePool;

/// Turn the input intent into the player's velocity for this tick.
pub fn apply_intent(world: &mut World, intent: MoveIntent) {
    for (_entity, (_player, stats, vel)) in
        world.query_mut::<(&Player, &PlayerStats, &mut Velocity)>()
    {
        *vel = Velocity::new(intent.x * stats.move_speed, intent.y * stats.move_speed);
    }
}

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    let bounds = DVec2::new(WORLD_WIDTH, WORLD_HEIGHT);
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        let moved = pos.as_dvec2() + vel.as_dvec2() * DT;
        *pos = moved.clamp(DVec2::ZERO, bounds).into();
    }
}

/// Move active projectiles and recycle the ones past their range.
pub fn advance_projectiles(pool: &mut ProjectilePool) {
    let mut expired = Vec::new();
    for (index, p) in pool.iter_active_mut() {
        p.position.x += p.velocity.x * DT;
        p.position.y += p.velocity.y * DT;
        p.travelled += p.velocity.speed() * DT;
        if p.travelled > PROJECTILE_MAX_RANGE {
            expired.push(index);
        }
    }
    for index in expired {
        pool.release(index);
    }
}
