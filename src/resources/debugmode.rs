//! Debug overlay toggle.
//!
//! The presence of [`DebugMode`] enables the collider and ground-probe
//! overlay. F11 flips it at runtime; `--debug` inserts it at startup.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
