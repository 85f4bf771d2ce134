//! Startup error types.
//!
//! Every failure the game can detect is a configuration problem caught
//! before the first frame runs. Per-tick code never returns errors: collaborator
//! calls are fire-and-forget and resource values are clamped.

use std::path::PathBuf;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{name}' must be a finite value greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f32 },

    #[error("fuel range is empty: min {min} must be lower than max {max}")]
    EmptyFuelRange { min: f32, max: f32 },

    #[error("player collider has a zero-size extent ({width}x{height})")]
    ZeroColliderExtent { width: f32, height: f32 },

    #[error("ground collision mask selects no layers")]
    EmptyGroundMask,

    #[error("[{section}] {key} = '{value}' is not a valid value")]
    BadValue {
        section: String,
        key: String,
        value: String,
    },

    #[error("spawn point y {spawn_y} is at or below the kill plane y {kill_plane_y}")]
    SpawnBelowKillPlane { spawn_y: f32, kill_plane_y: f32 },

    #[error("failed to load config file '{0}': {1}")]
    LoadFailed(PathBuf, String),

    #[error("failed to read level file '{0}': {1}")]
    LevelRead(PathBuf, String),

    #[error("failed to parse level file '{0}': {1}")]
    LevelParse(PathBuf, String),

    #[error("level '{0}' defines no platform slots")]
    EmptyLevel(PathBuf),
}
