//! Axis-aligned box collider.
//!
//! `offset` is measured from the entity's [`MapPosition`] to the box's
//! top-left corner; `size` is the full width/height. Platforms and the
//! player both use this component; the ground probe and the movement
//! pushout read it through [`BoxCollider::center`] and
//! [`BoxCollider::half_extents`].
//!
//! [`MapPosition`]: super::mapposition::MapPosition

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Box with its top-left corner at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Box centred on the entity position.
    pub fn centered(half_extents: Vector2) -> Self {
        Self {
            size: Vector2::new(half_extents.x * 2.0, half_extents.y * 2.0),
            offset: Vector2::new(-half_extents.x, -half_extents.y),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// (x, y, width, height) for drawing.
    pub fn rect(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn center(&self, position: Vector2) -> Vector2 {
        let (min, max) = self.aabb(position);
        Vector2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5)
    }

    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.size.x.abs() * 0.5, self.size.y.abs() * 0.5)
    }

    /// Strict AABB overlap; touching edges do not overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
