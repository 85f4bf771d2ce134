//! Screen flicker shown after a scramble.

use bevy_ecs::prelude::Resource;

const DEFAULT_DURATION: f32 = 0.3;
const DEFAULT_PERIOD: f32 = 0.05;

#[derive(Resource, Debug, Clone, Copy)]
pub struct ScrambleBlink {
    pub remaining: f32,
    pub duration: f32,
    /// Length of one on/off half cycle.
    pub period: f32,
}

impl Default for ScrambleBlink {
    fn default() -> Self {
        Self {
            remaining: 0.0,
            duration: DEFAULT_DURATION,
            period: DEFAULT_PERIOD,
        }
    }
}

impl ScrambleBlink {
    /// (Re)start the flicker.
    pub fn trigger(&mut self) {
        self.remaining = self.duration;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Whether the overlay is drawn this frame.
    pub fn flash_visible(&self) -> bool {
        if !self.is_active() {
            return false;
        }
        let elapsed = self.duration - self.remaining;
        (elapsed / self.period) as u32 % 2 == 0
    }
}
