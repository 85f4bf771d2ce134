//! Fade-in that precedes gameplay.
//!
//! Entering the level creates a fresh [`PauseGate`], shares it with the
//! player controller and starts a [`LoadingFader`]. Controllers stay paused
//! while the fade runs; when it completes the fader opens the gate, once.

use bevy_ecs::prelude::Resource;

use crate::locomotion::PauseGate;

#[derive(Resource, Debug, Clone)]
pub struct LoadingFader {
    pub elapsed: f32,
    pub duration: f32,
    pub gate: PauseGate,
}

impl LoadingFader {
    pub fn new(duration: f32, gate: PauseGate) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            gate,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance the fade. Returns true on the tick the gate opens.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.gate.is_open() {
            return false;
        }
        self.elapsed += dt;
        if self.is_done() {
            return self.gate.open();
        }
        false
    }

    /// Black overlay opacity in `[0, 1]`.
    pub fn overlay_alpha(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
