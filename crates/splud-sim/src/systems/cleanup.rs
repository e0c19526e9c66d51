//! Cleanup helpers: wave-end clearing and game-over freezing.

use hecs::{Entity, World};

use splud_core::components::Enemy;
use splud_core::types::Velocity;

/// Despawn every enemy. Uses a caller-owned buffer to avoid per-call
/// allocation. Returns the number removed.
pub fn clear_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Enemy>().into_iter().map(|(e, _)| e));

    let count = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    count
}

/// Zero every enemy velocity in place.
pub fn freeze_enemies(world: &mut World) {
    for (_entity, (_enemy, vel)) in world.query_mut::<(&Enemy, &mut Velocity)>() {
        *vel = Velocity::default();
    }
}
