//! One-shot particle bursts.
//!
//! Locomotion effects request a burst by spawning an entity with a
//! [`MapPosition`](super::mapposition::MapPosition) and a
//! [`ParticleEmitter`]. The
//! [`particle_emitter_system`](crate::systems::particleemitter::particle_emitter_system)
//! spawns the particles on the next fixed tick and despawns the emitter.
//!
//! # Coordinate System
//!
//! - 0° points up (negative Y in screen coordinates)
//! - Angles increase clockwise

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::locomotion::ParticlePrefab;

/// Shape and look of one burst.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstSpec {
    pub count: u32,
    /// Direction arc in degrees, stored as (min, max).
    pub arc_degrees: (f32, f32),
    /// Speed range, stored as (min, max).
    pub speed_range: (f32, f32),
    /// Lifetime range in seconds, stored as (min, max).
    pub ttl_range: (f32, f32),
    /// Downward acceleration applied to every particle.
    pub gravity: f32,
    pub size: f32,
    pub color: Color,
}

impl BurstSpec {
    pub fn for_prefab(prefab: ParticlePrefab) -> Self {
        match prefab {
            // Low fan kicked sideways from the feet.
            ParticlePrefab::Dust => BurstSpec {
                count: 8,
                arc_degrees: (-100.0, 100.0),
                speed_range: (20.0, 60.0),
                ttl_range: (0.25, 0.5),
                gravity: 120.0,
                size: 2.0,
                color: Color::new(200, 180, 150, 255),
            },
            // Downward plume from the jetpack.
            ParticlePrefab::Smoke => BurstSpec {
                count: 12,
                arc_degrees: (150.0, 210.0),
                speed_range: (40.0, 90.0),
                ttl_range: (0.4, 0.8),
                gravity: -20.0,
                size: 3.0,
                color: Color::new(120, 120, 130, 255),
            },
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    pub prefab: ParticlePrefab,
    pub spec: BurstSpec,
}

impl ParticleEmitter {
    pub fn burst(prefab: ParticlePrefab) -> Self {
        Self {
            prefab,
            spec: BurstSpec::for_prefab(prefab),
        }
    }
}
