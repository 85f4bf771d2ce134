//! Game configuration resource.
//!
//! Settings are loaded from an INI file; every key is optional and missing
//! values keep the safe defaults. A key that is present but does not parse
//! fails the load. The `[player]` section feeds the [`LocomotionConfig`]
//! shared by every player controller.
//!
//! # Configuration File Format
//!
//! The shipped `config.ini`:
//!
//! ```ini
//! [window]
//! width = 640
//! height = 360
//! target_fps = 120
//! vsync = true
//!
//! [physics]
//! fixed_hz = 50
//! max_steps_per_frame = 5
//! gravity = 600
//!
//! [player]
//! speed = 140
//! jump_impulse = 260
//! boost_speed = 120
//! movement_smoothing = 0.05
//! fuel_min = 0
//! fuel_max = 1
//! fuel_consumption_rate = 0.35
//! fuel_recharge_rate = 0.2
//! probe_depth = 2
//! ground_mask = 1
//! half_width = 6
//! half_height = 10
//! spawn_x = 64
//! spawn_y = 310
//! dust_offset_x = 0
//! dust_offset_y = 10
//! smoke_offset_x = -5
//! smoke_offset_y = 2
//!
//! [level]
//! layout = ./assets/levels/level01.json
//! kill_plane_y = 420
//! load_fade_seconds = 0.75
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::locomotion::LocomotionConfig;
use crate::resources::worldtime::{DEFAULT_FIXED_HZ, DEFAULT_MAX_STEPS_PER_FRAME};

const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 360;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_GRAVITY: f32 = 600.0;
const DEFAULT_LEVEL_PATH: &str = "./assets/levels/level01.json";
const DEFAULT_KILL_PLANE_Y: f32 = 420.0;
const DEFAULT_LOAD_FADE_SECONDS: f32 = 0.75;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Fixed physics ticks per second.
    pub fixed_hz: f32,
    pub max_steps_per_frame: u32,
    /// Downward acceleration applied to the player body.
    pub gravity: f32,
    pub player: LocomotionConfig,
    pub level_path: PathBuf,
    /// Bodies whose position falls below this Y are respawned.
    pub kill_plane_y: f32,
    /// Duration of the fade-in that precedes gameplay.
    pub load_fade_seconds: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fixed_hz: DEFAULT_FIXED_HZ,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
            gravity: DEFAULT_GRAVITY,
            player: LocomotionConfig::default(),
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            kill_plane_y: DEFAULT_KILL_PLANE_Y,
            load_fade_seconds: DEFAULT_LOAD_FADE_SECONDS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from `config_path`. Missing keys keep their current value;
    /// a key whose value does not parse is an error.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| ConfigError::LoadFailed(self.config_path.clone(), e))?;
        self.apply_ini(&ini)?;
        info!(
            "Loaded config {:?}: {}x{} window, fps={}, vsync={}, fixed_hz={}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fixed_hz
        );
        Ok(())
    }

    /// Load values from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| ConfigError::LoadFailed(self.config_path.clone(), e))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        let uint = |section: &str, key: &str| {
            ini.getuint(section, key)
                .map_err(|_| bad_value(ini, section, key))
        };
        let float = |section: &str, key: &str| {
            ini.getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|_| bad_value(ini, section, key))
        };

        // [window]
        if let Some(v) = uint("window", "width")? {
            self.window_width = v as u32;
        }
        if let Some(v) = uint("window", "height")? {
            self.window_height = v as u32;
        }
        if let Some(v) = uint("window", "target_fps")? {
            self.target_fps = v as u32;
        }
        if let Some(v) = ini
            .getbool("window", "vsync")
            .map_err(|_| bad_value(ini, "window", "vsync"))?
        {
            self.vsync = v;
        }

        // [physics]
        if let Some(v) = float("physics", "fixed_hz")? {
            self.fixed_hz = v;
        }
        if let Some(v) = uint("physics", "max_steps_per_frame")? {
            self.max_steps_per_frame = v as u32;
        }
        if let Some(v) = float("physics", "gravity")? {
            self.gravity = v;
        }

        // [player]
        let p = &mut self.player;
        let scalars: [(&str, &mut f32); 9] = [
            ("speed", &mut p.speed),
            ("jump_impulse", &mut p.jump_impulse),
            ("boost_speed", &mut p.boost_speed),
            ("movement_smoothing", &mut p.movement_smoothing),
            ("fuel_min", &mut p.fuel_min),
            ("fuel_max", &mut p.fuel_max),
            ("fuel_consumption_rate", &mut p.fuel_consumption_rate),
            ("fuel_recharge_rate", &mut p.fuel_recharge_rate),
            ("probe_depth", &mut p.probe_depth),
        ];
        for (key, field) in scalars {
            if let Some(v) = float("player", key)? {
                *field = v;
            }
        }
        if let Some(v) = uint("player", "ground_mask")? {
            p.ground_mask = v as u32;
        }
        read_vec(&float, "half_width", "half_height", &mut p.collider_half_extents)?;
        read_vec(&float, "spawn_x", "spawn_y", &mut p.spawn_point)?;
        read_vec(&float, "dust_offset_x", "dust_offset_y", &mut p.dust_offset)?;
        read_vec(&float, "smoke_offset_x", "smoke_offset_y", &mut p.smoke_offset)?;

        // [level]
        if let Some(v) = ini.get("level", "layout") {
            self.level_path = PathBuf::from(v);
        }
        if let Some(v) = float("level", "kill_plane_y")? {
            self.kill_plane_y = v;
        }
        if let Some(v) = float("level", "load_fade_seconds")? {
            self.load_fade_seconds = v;
        }
        Ok(())
    }

    /// Validated copy of the player archetype.
    pub fn locomotion(&self) -> Result<LocomotionConfig, ConfigError> {
        self.player.validate()?;
        Ok(self.player.clone())
    }

    /// Check every value the game needs before a window is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        if !(self.fixed_hz.is_finite() && self.fixed_hz > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "fixed_hz",
                value: self.fixed_hz,
            });
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::NotPositive {
                name: "max_steps_per_frame",
                value: 0.0,
            });
        }
        if self.player.spawn_point.y >= self.kill_plane_y {
            return Err(ConfigError::SpawnBelowKillPlane {
                spawn_y: self.player.spawn_point.y,
                kill_plane_y: self.kill_plane_y,
            });
        }
        if !(self.load_fade_seconds.is_finite() && self.load_fade_seconds >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "load_fade_seconds",
                value: self.load_fade_seconds,
            });
        }
        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

fn read_vec(
    float: &impl Fn(&str, &str) -> Result<Option<f32>, ConfigError>,
    key_x: &str,
    key_y: &str,
    target: &mut Vector2,
) -> Result<(), ConfigError> {
    if let Some(x) = float("player", key_x)? {
        target.x = x;
    }
    if let Some(y) = float("player", key_y)? {
        target.y = y;
    }
    Ok(())
}

/// Error for a key that is present but does not parse.
fn bad_value(ini: &Ini, section: &str, key: &str) -> ConfigError {
    ConfigError::BadValue {
        section: section.to_string(),
        key: key.to_string(),
        value: ini.get(section, key).unwrap_or_default(),
    }
}
