//! Frame and fixed-step time.
//!
//! `delta` is the (scaled) delta of the current rendered frame. The fixed
//! physics phase runs at `fixed_delta`; frame time is banked in
//! `accumulator` and [`WorldTime::plan_fixed_steps`] decides how many fixed
//! ticks the frame owes.

use bevy_ecs::prelude::Resource;

/// Default fixed physics rate.
pub const DEFAULT_FIXED_HZ: f32 = 50.0;
/// Default cap on fixed ticks run in a single frame.
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 5;

/// How many fixed ticks to run this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub ticks_to_run: u32,
    /// Backlog thrown away because the tick cap was hit.
    pub dropped_backlog: f32,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub fixed_delta: f32,
    pub accumulator: f32,
    pub max_steps_per_frame: u32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            fixed_delta: 1.0 / DEFAULT_FIXED_HZ,
            accumulator: 0.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }
}

impl WorldTime {
    pub fn with_fixed_rate(mut self, hz: f32, max_steps_per_frame: u32) -> Self {
        self.fixed_delta = 1.0 / hz;
        self.max_steps_per_frame = max_steps_per_frame.max(1);
        self
    }

    /// Consume whole fixed ticks from the accumulator.
    ///
    /// At most `max_steps_per_frame` ticks are planned; if a full tick is
    /// still banked after that, the whole remainder is dropped so a long
    /// stall does not turn into a spiral of catch-up frames.
    pub fn plan_fixed_steps(&mut self) -> StepPlan {
        let mut ticks_to_run = 0;
        while self.accumulator >= self.fixed_delta && ticks_to_run < self.max_steps_per_frame {
            self.accumulator -= self.fixed_delta;
            ticks_to_run += 1;
        }

        let mut dropped_backlog = 0.0;
        if self.accumulator >= self.fixed_delta {
            dropped_backlog = self.accumulator;
            self.accumulator = 0.0;
        }
        StepPlan {
            ticks_to_run,
            dropped_backlog,
        }
    }
}
