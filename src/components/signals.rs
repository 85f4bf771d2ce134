// Per-entity animation parameters, written by the locomotion controller and
// read by the renderer.

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default, Component)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Set or clear `key` depending on `value`.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        if value {
            self.set_flag(key);
        } else {
            self.clear_flag(key);
        }
    }
}
