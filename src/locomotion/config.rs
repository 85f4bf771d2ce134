//! Tuning values for the player locomotion archetype.
//!
//! A [`LocomotionConfig`] is built once (usually from
//! [`GameConfig`](crate::resources::gameconfig::GameConfig)), validated, and
//! then cloned into every controller of that archetype. Validation is the only
//! place misconfiguration is reported; per-tick code assumes a valid config.

use raylib::prelude::Vector2;

use crate::error::ConfigError;
use crate::locomotion::sensor::GROUND_LAYER;

/// Immutable movement, boost, fuel and sensor parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionConfig {
    /// Horizontal target speed at full axis deflection, in pixels per second.
    pub speed: f32,
    /// Upward velocity added by a ground jump, in pixels per second.
    pub jump_impulse: f32,
    /// Constant climb speed while boosting, in pixels per second.
    pub boost_speed: f32,
    /// Smoothing time constant in seconds.
    pub movement_smoothing: f32,
    pub fuel_min: f32,
    pub fuel_max: f32,
    /// Fuel units consumed per second of boost.
    pub fuel_consumption_rate: f32,
    /// Fuel units recovered per second while grounded.
    pub fuel_recharge_rate: f32,
    /// Distance the ground sensor sweeps below the collider.
    pub probe_depth: f32,
    /// Collision layers that count as ground.
    pub ground_mask: u32,
    /// Half width and half height of the actor's collider.
    pub collider_half_extents: Vector2,
    /// Where the actor appears on spawn and respawn.
    pub spawn_point: Vector2,
    /// Dust burst offset from the actor's center (x mirrored by facing).
    pub dust_offset: Vector2,
    /// Smoke burst offset from the actor's center (x mirrored by facing).
    pub smoke_offset: Vector2,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: 140.0,
            jump_impulse: 260.0,
            boost_speed: 120.0,
            movement_smoothing: 0.05,
            fuel_min: 0.0,
            fuel_max: 1.0,
            fuel_consumption_rate: 0.35,
            fuel_recharge_rate: 0.2,
            probe_depth: 2.0,
            ground_mask: GROUND_LAYER,
            collider_half_extents: Vector2 { x: 6.0, y: 10.0 },
            spawn_point: Vector2 { x: 64.0, y: 200.0 },
            dust_offset: Vector2 { x: 0.0, y: 10.0 },
            smoke_offset: Vector2 { x: -5.0, y: 2.0 },
        }
    }
}

impl LocomotionConfig {
    /// Reject values the controller cannot run with.
    ///
    /// Rates, speeds, the smoothing constant and the probe depth must be
    /// strictly positive, the fuel range non-empty, the collider non-degenerate
    /// and the ground mask non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("speed", self.speed),
            ("jump_impulse", self.jump_impulse),
            ("boost_speed", self.boost_speed),
            ("movement_smoothing", self.movement_smoothing),
            ("fuel_consumption_rate", self.fuel_consumption_rate),
            ("fuel_recharge_rate", self.fuel_recharge_rate),
            ("probe_depth", self.probe_depth),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if !(self.fuel_min.is_finite() && self.fuel_max.is_finite())
            || self.fuel_min >= self.fuel_max
        {
            return Err(ConfigError::EmptyFuelRange {
                min: self.fuel_min,
                max: self.fuel_max,
            });
        }

        let half = self.collider_half_extents;
        if !(half.x > 0.0 && half.y > 0.0) {
            return Err(ConfigError::ZeroColliderExtent {
                width: half.x * 2.0,
                height: half.y * 2.0,
            });
        }

        if self.ground_mask == 0 {
            return Err(ConfigError::EmptyGroundMask);
        }

        Ok(())
    }
}
