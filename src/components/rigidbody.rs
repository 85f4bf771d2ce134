//! Kinematic body with named acceleration forces.
//!
//! The [`RigidBody`] stores velocity and a set of named accelerations. The
//! player carries a `"gravity"` force; particles carry a lighter one so
//! bursts drift and fall.
//!
//! The locomotion controller writes `velocity` directly during its physics
//! phase; the `movement` system then adds the forces and integrates position
//! at the fixed rate.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Name of the force installed by [`RigidBody::with_gravity`].
pub const GRAVITY: &str = "gravity";

#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// World units per second.
    pub velocity: Vector2,
    /// Named accelerations in world units per second squared.
    pub forces: FxHashMap<String, Vector2>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            forces: FxHashMap::default(),
        }
    }

    /// Body falling under `gravity` (positive is down).
    pub fn with_gravity(gravity: f32) -> Self {
        let mut rb = Self::new();
        rb.add_force(GRAVITY, Vector2 { x: 0.0, y: gravity });
        rb
    }

    /// Add or replace a named force.
    pub fn add_force(&mut self, name: &str, value: Vector2) {
        self.forces.insert(name.to_string(), value);
    }

    pub fn total_acceleration(&self) -> Vector2 {
        self.forces
            .values()
            .fold(Vector2 { x: 0.0, y: 0.0 }, |total, force| total + *force)
    }
}
