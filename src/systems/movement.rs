//! Fixed-rate integration and platform pushout.
//!
//! Every [`RigidBody`] gains its forces and moves by its
//! velocity over one fixed tick. Bodies with a [`BoxCollider`] are then
//! pushed out of static platforms one axis at a time (X first, then Y),
//! cancelling the velocity component that drove them in.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Penetration at or below this depth is treated as touching.
const PUSHOUT_SKIN: f32 = 0.001;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

pub fn movement(
    time: Res<WorldTime>,
    platforms: Query<(&MapPosition, &BoxCollider), With<Platform>>,
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>), Without<Platform>>,
) {
    let dt = time.fixed_delta;
    let solids: Vec<(Vector2, Vector2)> = platforms
        .iter()
        .map(|(pos, collider)| collider.aabb(pos.pos))
        .collect();

    for (mut position, mut body, collider) in bodies.iter_mut() {
        let acceleration = body.total_acceleration();
        body.velocity += acceleration * dt;

        let Some(collider) = collider else {
            position.pos += body.velocity * dt;
            continue;
        };

        position.pos.x += body.velocity.x * dt;
        resolve_axis(&mut position.pos, &mut body.velocity, collider, &solids, Axis::X);
        position.pos.y += body.velocity.y * dt;
        resolve_axis(&mut position.pos, &mut body.velocity, collider, &solids, Axis::Y);
    }
}

fn resolve_axis(
    pos: &mut Vector2,
    velocity: &mut Vector2,
    collider: &BoxCollider,
    solids: &[(Vector2, Vector2)],
    axis: Axis,
) {
    for (solid_min, solid_max) in solids {
        let (min, max) = collider.aabb(*pos);
        let overlapping = min.x < solid_max.x - PUSHOUT_SKIN
            && max.x > solid_min.x + PUSHOUT_SKIN
            && min.y < solid_max.y - PUSHOUT_SKIN
            && max.y > solid_min.y + PUSHOUT_SKIN;
        if !overlapping {
            continue;
        }
        match axis {
            Axis::X => {
                let shift = pushout(min.x, max.x, solid_min.x, solid_max.x, velocity.x);
                pos.x += shift;
                velocity.x = 0.0;
            }
            Axis::Y => {
                let shift = pushout(min.y, max.y, solid_min.y, solid_max.y, velocity.y);
                pos.y += shift;
                velocity.y = 0.0;
            }
        }
    }
}

/// Displacement that separates `[min, max]` from `[solid_min, solid_max]`
/// against the direction of travel, or along the shallower side at rest.
fn pushout(min: f32, max: f32, solid_min: f32, solid_max: f32, velocity: f32) -> f32 {
    let back = solid_min - max;
    let forward = solid_max - min;
    if velocity > 0.0 {
        back
    } else if velocity < 0.0 {
        forward
    } else if back.abs() < forward.abs() {
        back
    } else {
        forward
    }
}
