//! Burst emitter system.
//!
//! Every [`ParticleEmitter`] entity is a one-shot request: on the next frame
//! the system spawns `count` particles at the emitter position, each with a
//! random direction inside the arc, a random speed and a random lifetime,
//! then despawns the emitter.
//!
//! # Coordinate System
//!
//! - 0° points up (negative Y in screen coordinates)
//! - Angles increase clockwise
//! - Y+ is down (screen coordinates)

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;
use crate::components::particleemitter::{BurstSpec, ParticleEmitter};
use crate::components::rigidbody::RigidBody;
use crate::components::sceneentity::SceneEntity;
use crate::components::ttl::Ttl;

pub fn particle_emitter_system(
    emitters: Query<(Entity, &MapPosition, &ParticleEmitter)>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    for (entity, origin, emitter) in emitters.iter() {
        emit_burst(&mut commands, origin.pos, &emitter.spec, &mut rng);
        commands.entity(entity).try_despawn();
    }
}

/// Sample a random f32 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Unit vector for `angle_deg` (0° = up, clockwise).
fn direction(angle_deg: f32) -> Vector2 {
    let theta = angle_deg.to_radians();
    Vector2 {
        x: theta.sin(),
        y: -theta.cos(),
    }
}

fn emit_burst(commands: &mut Commands, origin: Vector2, spec: &BurstSpec, rng: &mut Rng) {
    for _ in 0..spec.count {
        let angle = random_f32_range(rng, spec.arc_degrees.0, spec.arc_degrees.1);
        let speed = random_f32_range(rng, spec.speed_range.0, spec.speed_range.1);
        let lifetime = random_f32_range(rng, spec.ttl_range.0, spec.ttl_range.1);

        let mut body = RigidBody::with_gravity(spec.gravity);
        body.velocity = direction(angle) * speed;

        commands.spawn((
            Particle {
                size: spec.size,
                color: spec.color,
            },
            MapPosition::from_vec(origin),
            body,
            Ttl::new(lifetime),
            SceneEntity,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_direction_zero_points_up() {
        let up = direction(0.0);
        assert!(up.x.abs() < EPSILON);
        assert!((up.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_direction_is_clockwise() {
        let right = direction(90.0);
        assert!((right.x - 1.0).abs() < EPSILON);
        assert!(right.y.abs() < EPSILON);
        let down = direction(180.0);
        assert!((down.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = Rng::with_seed(7);
        assert_eq!(random_f32_range(&mut rng, 3.0, 3.0), 3.0);
        let sampled = random_f32_range(&mut rng, 1.0, 2.0);
        assert!((1.0..=2.0).contains(&sampled));
    }
}
