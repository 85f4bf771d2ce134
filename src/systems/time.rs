//! Time update.
//!
//! Updates the shared [`WorldTime`] resource once per frame, applying
//! `time_scale` to the raw delta and banking it for the fixed phase.
use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::worldtime::{StepPlan, WorldTime};

/// Advance elapsed/delta and the fixed-step accumulator by `dt` (unscaled).
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.accumulator += scaled_dt;
}

/// Plan this frame's fixed ticks, warning when backlog is dropped.
pub fn plan_fixed_steps(world: &mut World) -> StepPlan {
    let plan = world.resource_mut::<WorldTime>().plan_fixed_steps();
    if plan.dropped_backlog > 0.0 {
        warn!(
            "Dropped {:.3}s of fixed-step backlog after {} ticks",
            plan.dropped_backlog, plan.ticks_to_run
        );
    }
    plan
}
