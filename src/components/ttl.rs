//! Time-to-live component for automatic entity despawning.
//!
//! Particles are spawned with a [`Ttl`]; the
//! [`ttl_system`](crate::systems::ttl::ttl_system) counts it down with the
//! frame delta and despawns the entity when it reaches zero.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
    /// Initial lifetime, used to fade particles out.
    pub total: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl {
            remaining: seconds,
            total: seconds,
        }
    }

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn fraction_left(&self) -> f32 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.total).clamp(0.0, 1.0)
    }
}
