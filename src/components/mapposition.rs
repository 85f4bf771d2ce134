//! World-space position of an entity.
//!
//! For bodies with a [`BoxCollider`](super::boxcollider::BoxCollider) the
//! position is the pivot the collider offset is measured from; the player
//! uses a centred collider, so its position is also its centre.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
