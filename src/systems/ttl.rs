//! Lifetime countdown.
//!
//! [`ttl_system`] subtracts the scaled frame delta from every
//! [`Ttl`](crate::components::ttl::Ttl) and despawns entities whose time ran
//! out. Burst particles are the only users; the renderer fades them with
//! [`Ttl::fraction_left`](crate::components::ttl::Ttl::fraction_left).

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
