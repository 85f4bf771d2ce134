use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// A short-lived square drawn by the renderer, spawned by bursts.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub size: f32,
    pub color: Color,
}
