//! Boost fuel.
//!
//! [`FuelGauge`] is a bounded level in `[min, max]` that drains while the
//! actor boosts and refills while it stands on ground. Every mutation clamps,
//! so the level can never leave its range and no debt carries over between
//! ticks.

use crate::locomotion::config::LocomotionConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelGauge {
    level: f32,
    min: f32,
    max: f32,
    consumption_rate: f32,
    recharge_rate: f32,
}

impl FuelGauge {
    /// Create a full gauge.
    pub fn new(min: f32, max: f32, consumption_rate: f32, recharge_rate: f32) -> Self {
        Self {
            level: max,
            min,
            max,
            consumption_rate,
            recharge_rate,
        }
    }

    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self::new(
            config.fuel_min,
            config.fuel_max,
            config.fuel_consumption_rate,
            config.fuel_recharge_rate,
        )
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Level mapped to `[0, 1]`, for display widgets.
    pub fn fraction(&self) -> f32 {
        (self.level - self.min) / (self.max - self.min)
    }

    /// Refill for `dt` seconds. Callers only do this while grounded.
    pub fn recharge(&mut self, dt: f32) {
        self.set_level(self.level + self.recharge_rate * dt);
    }

    /// Drain for `dt` seconds. Callers only do this while boosting with fuel.
    pub fn consume(&mut self, dt: f32) {
        self.set_level(self.level - self.consumption_rate * dt);
    }

    /// Strictly above the minimum.
    pub fn has_fuel(&self) -> bool {
        self.level > self.min
    }

    /// Overwrite the level, clamped into range.
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn gauge() -> FuelGauge {
        FuelGauge::new(0.0, 1.0, 0.5, 0.25)
    }

    #[test]
    fn test_starts_full() {
        let fuel = gauge();
        assert!(approx_eq(fuel.level(), 1.0));
        assert!(fuel.has_fuel());
        assert!(approx_eq(fuel.fraction(), 1.0));
    }

    #[test]
    fn test_consume_drains_by_rate() {
        let mut fuel = gauge();
        fuel.consume(0.5);
        assert!(approx_eq(fuel.level(), 0.75));
    }

    #[test]
    fn test_consume_never_goes_below_min() {
        let mut fuel = gauge();
        fuel.consume(10.0);
        assert!(approx_eq(fuel.level(), 0.0));
        assert!(!fuel.has_fuel());
        fuel.consume(1.0);
        assert!(approx_eq(fuel.level(), 0.0));
    }

    #[test]
    fn test_recharge_never_exceeds_max() {
        let mut fuel = gauge();
        fuel.recharge(10.0);
        assert!(approx_eq(fuel.level(), 1.0));
    }

    #[test]
    fn test_recharge_refills_by_rate() {
        let mut fuel = gauge();
        fuel.set_level(0.0);
        fuel.recharge(2.0);
        assert!(approx_eq(fuel.level(), 0.5));
    }

    #[test]
    fn test_has_fuel_is_strict() {
        let mut fuel = FuelGauge::new(0.2, 1.0, 1.0, 1.0);
        fuel.set_level(0.2);
        assert!(!fuel.has_fuel());
        fuel.set_level(0.2001);
        assert!(fuel.has_fuel());
    }

    #[test]
    fn test_set_level_clamps_out_of_range() {
        let mut fuel = gauge();
        fuel.set_level(-3.0);
        assert!(approx_eq(fuel.level(), 0.0));
        fuel.set_level(7.0);
        assert!(approx_eq(fuel.level(), 1.0));
    }

    #[test]
    fn test_bounds_hold_over_mixed_sequence() {
        let mut fuel = FuelGauge::new(-1.0, 2.0, 1.3, 0.7);
        let steps = [0.1, 0.9, 2.5, 0.016, 4.0, 0.3];
        for (i, dt) in steps.iter().cycle().take(60).enumerate() {
            if i % 3 == 0 {
                fuel.recharge(*dt);
            } else {
                fuel.consume(*dt);
            }
            assert!(fuel.level() >= fuel.min() && fuel.level() <= fuel.max());
        }
    }

    #[test]
    fn test_fraction_maps_offset_range() {
        let mut fuel = FuelGauge::new(10.0, 20.0, 1.0, 1.0);
        fuel.set_level(15.0);
        assert!(approx_eq(fuel.fraction(), 0.5));
    }
}
