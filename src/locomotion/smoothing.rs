//! Critically damped velocity smoothing.
//!
//! [`VelocitySmoother::smooth_towards`] moves a velocity toward a target like a
//! critically damped spring with time constant `smooth_time`, so mode switches
//! never produce a velocity jump. The smoother keeps the rate of change between
//! calls in an accumulator; clearing it mid-flight causes a visible kink, so
//! only respawn does that.

use raylib::prelude::Vector2;

/// Lower bound for the time constant to keep `2 / smooth_time` finite.
const MIN_SMOOTH_TIME: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySmoother {
    accumulator: Vector2,
}

impl Default for VelocitySmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocitySmoother {
    pub fn new() -> Self {
        Self {
            accumulator: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Current rate-of-change history.
    pub fn accumulator(&self) -> Vector2 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = Vector2 { x: 0.0, y: 0.0 };
    }

    /// Advance `current` toward `target` by one step of `dt` seconds.
    ///
    /// Uses the cubic approximation of `exp(-omega * dt)`. If the step would
    /// overshoot the target the result lands exactly on it and the
    /// accumulator is cleared. A non-positive `dt` leaves everything untouched.
    pub fn smooth_towards(
        &mut self,
        current: Vector2,
        target: Vector2,
        smooth_time: f32,
        dt: f32,
    ) -> Vector2 {
        if dt <= 0.0 {
            return current;
        }

        let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change_x = current.x - target.x;
        let change_y = current.y - target.y;

        let temp_x = (self.accumulator.x + omega * change_x) * dt;
        let temp_y = (self.accumulator.y + omega * change_y) * dt;

        self.accumulator = Vector2 {
            x: (self.accumulator.x - omega * temp_x) * decay,
            y: (self.accumulator.y - omega * temp_y) * decay,
        };

        let output = Vector2 {
            x: target.x + (change_x + temp_x) * decay,
            y: target.y + (change_y + temp_y) * decay,
        };

        // Overshoot: the result went past the target along the approach direction.
        let approach_x = target.x - current.x;
        let approach_y = target.y - current.y;
        let past_x = output.x - target.x;
        let past_y = output.y - target.y;
        if approach_x * past_x + approach_y * past_y > 0.0 {
            self.accumulator = Vector2 { x: 0.0, y: 0.0 };
            return target;
        }

        output
    }
}
