//! Level layout and platform re-layout.
//!
//! A level is a JSON file listing candidate platform slots plus an optional
//! fixed floor:
//!
//! ```json
//! {
//!   "name": "Level 01",
//!   "platform_count": 4,
//!   "floor": { "x": 0, "y": 330, "width": 640, "height": 30 },
//!   "slots": [ { "x": 40, "y": 260, "width": 96, "height": 12 } ]
//! }
//! ```
//!
//! [`PlatformLayout`] keeps which slots are occupied. A scramble asks for a
//! new random selection with [`PlatformLayout::request_relayout`]; the
//! platform system performs it on its next run.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Axis-aligned rectangle, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSlot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub name: String,
    /// Platforms placed at once. Clamped to the number of slots.
    pub platform_count: usize,
    #[serde(default)]
    pub floor: Option<PlatformSlot>,
    pub slots: Vec<PlatformSlot>,
}

impl LevelLayout {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LevelRead(path.to_path_buf(), e.to_string()))?;
        let layout = Self::parse(&text)
            .map_err(|e| ConfigError::LevelParse(path.to_path_buf(), e.to_string()))?;
        if layout.slots.is_empty() {
            return Err(ConfigError::EmptyLevel(path.to_path_buf()));
        }
        info!(
            "Loaded level '{}' from {:?}: {} slots, {} platforms",
            layout.name,
            path,
            layout.slots.len(),
            layout.platform_count()
        );
        Ok(layout)
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn platform_count(&self) -> usize {
        self.platform_count.min(self.slots.len())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct PlatformLayout {
    pub level: LevelLayout,
    /// Slot index occupied by each platform.
    pub active: Vec<usize>,
    /// Bumped on every re-layout.
    pub generation: u32,
    pending: bool,
}

impl PlatformLayout {
    /// Layout with the first `platform_count` slots occupied.
    pub fn new(level: LevelLayout) -> Self {
        let active = (0..level.platform_count()).collect();
        Self {
            level,
            active,
            generation: 0,
            pending: false,
        }
    }

    /// Ask for a new random selection. Repeated requests before the next
    /// apply collapse into one.
    pub fn request_relayout(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Pick `platform_count` distinct slots at random.
    pub fn relayout(&mut self, rng: &mut Rng) {
        let mut slots: Vec<usize> = (0..self.level.slots.len()).collect();
        rng.shuffle(&mut slots);
        slots.truncate(self.level.platform_count());
        self.active = slots;
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
        debug!("Platform layout {} -> {:?}", self.generation, self.active);
    }

    /// Rectangle currently assigned to platform `index`.
    pub fn slot_for(&self, index: usize) -> Option<PlatformSlot> {
        self.active
            .get(index)
            .and_then(|slot| self.level.slots.get(*slot))
            .copied()
    }
}
