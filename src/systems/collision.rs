//! Static collider snapshot and box sweeps.
//!
//! [`StaticColliders`] is built from the platform query at the start of a
//! physics tick and implements [`ShapeCaster`] for the ground sensor. A box
//! sweep is answered as a ray cast from the box centre against every
//! collider grown by the box's half extents (Minkowski sum), using the slab
//! method. The reported normal is the face of the grown box that was entered
//! first, so a landing on a platform top is exactly `(0, -1)`.

use raylib::prelude::Vector2;

use crate::locomotion::{ShapeCaster, SweepHit};

/// Entry times this close below zero count as touching, not overlapping.
const CONTACT_SKIN: f32 = 0.01;
const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub min: Vector2,
    pub max: Vector2,
    pub layer: u32,
}

#[derive(Debug, Clone, Default)]
pub struct StaticColliders {
    colliders: Vec<StaticCollider>,
}

impl StaticColliders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, min: Vector2, max: Vector2, layer: u32) {
        self.colliders.push(StaticCollider { min, max, layer });
    }
}

impl FromIterator<StaticCollider> for StaticColliders {
    fn from_iter<T: IntoIterator<Item = StaticCollider>>(iter: T) -> Self {
        Self {
            colliders: iter.into_iter().collect(),
        }
    }
}

impl ShapeCaster for StaticColliders {
    fn sweep_box(
        &self,
        center: Vector2,
        half_extents: Vector2,
        direction: Vector2,
        distance: f32,
        mask: u32,
    ) -> Option<SweepHit> {
        let mut best: Option<SweepHit> = None;
        for collider in self.colliders.iter().filter(|c| c.layer & mask != 0) {
            let min = Vector2 {
                x: collider.min.x - half_extents.x,
                y: collider.min.y - half_extents.y,
            };
            let max = Vector2 {
                x: collider.max.x + half_extents.x,
                y: collider.max.y + half_extents.y,
            };
            if let Some(hit) = ray_vs_box(center, direction, distance, min, max)
                && best.is_none_or(|b| hit.distance < b.distance)
            {
                best = Some(hit);
            }
        }
        best
    }
}

/// One slab: entry/exit time along an axis and the normal of the entry face.
fn slab(
    origin: f32,
    dir: f32,
    min: f32,
    max: f32,
    negative_face: Vector2,
) -> Option<(f32, f32, Vector2)> {
    if dir.abs() < PARALLEL_EPSILON {
        // Moving parallel: must already be strictly inside the slab.
        if origin <= min || origin >= max {
            return None;
        }
        return Some((f32::NEG_INFINITY, f32::INFINITY, Vector2 { x: 0.0, y: 0.0 }));
    }
    let inv = 1.0 / dir;
    let t1 = (min - origin) * inv;
    let t2 = (max - origin) * inv;
    if t1 < t2 {
        Some((t1, t2, negative_face))
    } else {
        let positive_face = Vector2 {
            x: -negative_face.x,
            y: -negative_face.y,
        };
        Some((t2, t1, positive_face))
    }
}

fn ray_vs_box(
    origin: Vector2,
    direction: Vector2,
    distance: f32,
    min: Vector2,
    max: Vector2,
) -> Option<SweepHit> {
    let left = Vector2 { x: -1.0, y: 0.0 };
    let top = Vector2 { x: 0.0, y: -1.0 };
    let (x_enter, x_exit, x_normal) = slab(origin.x, direction.x, min.x, max.x, left)?;
    let (y_enter, y_exit, y_normal) = slab(origin.y, direction.y, min.y, max.y, top)?;

    let (t_enter, normal) = if x_enter > y_enter {
        (x_enter, x_normal)
    } else {
        (y_enter, y_normal)
    };
    let t_exit = x_exit.min(y_exit);

    if t_enter > t_exit || t_exit <= 0.0 || t_enter > distance {
        return None;
    }
    if t_enter < -CONTACT_SKIN {
        // Started inside the box: report an immediate hit against the sweep.
        return Some(SweepHit {
            normal: Vector2 {
                x: -direction.x,
                y: -direction.y,
            },
            distance: 0.0,
        });
    }
    Some(SweepHit {
        normal,
        distance: t_enter.max(0.0),
    })
}
