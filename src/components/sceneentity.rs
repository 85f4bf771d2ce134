//! Marker for entities owned by the current scene.
//!
//! Everything spawned by a scene enter hook (and every burst or particle
//! spawned while it runs) carries [`SceneEntity`]; leaving the scene
//! despawns them all. Registered hook systems and observers do not carry it
//! and survive scene changes.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SceneEntity;
