//! Ground contact detection.
//!
//! The [`GroundSensor`] sweeps a box the size of the actor's collider straight
//! down by a short probe depth and asks the physics collaborator (any
//! [`ShapeCaster`]) for the first hit on the ground layers. Only a hit whose
//! surface normal is exactly "up" counts as standing: slopes, walls and
//! ceilings do not.

use raylib::prelude::Vector2;

/// Layer bit used by walkable platforms.
pub const GROUND_LAYER: u32 = 1 << 0;

/// Up unit vector in screen space (Y grows down).
pub const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };

/// Down unit vector in screen space.
pub const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };

/// Result of a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Surface normal of the face that was hit.
    pub normal: Vector2,
    /// Distance travelled along the sweep direction before contact.
    pub distance: f32,
}

/// Shape-sweep query offered by the physics collaborator.
pub trait ShapeCaster {
    /// Sweep an axis-aligned box from `center` along `direction` for at most
    /// `distance`, testing only colliders whose layer intersects `mask`.
    fn sweep_box(
        &self,
        center: Vector2,
        half_extents: Vector2,
        direction: Vector2,
        distance: f32,
        mask: u32,
    ) -> Option<SweepHit>;
}

/// Outcome of one ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub hit: bool,
    pub normal: Vector2,
}

impl GroundContact {
    /// No collider below the actor.
    pub const NONE: GroundContact = GroundContact {
        hit: false,
        normal: Vector2 { x: 0.0, y: 0.0 },
    };

    /// Contact with a flat floor.
    pub const FLOOR: GroundContact = GroundContact {
        hit: true,
        normal: UP,
    };

    /// Whether this contact counts as standing on ground.
    pub fn is_standing(&self) -> bool {
        self.hit && self.normal == UP
    }
}

/// Stateless downward probe parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    pub probe_depth: f32,
    pub mask: u32,
}

impl GroundSensor {
    pub fn new(probe_depth: f32, mask: u32) -> Self {
        Self { probe_depth, mask }
    }

    /// Probe below a collider centred at `center` with the given half extents.
    pub fn probe(
        &self,
        caster: &impl ShapeCaster,
        center: Vector2,
        half_extents: Vector2,
    ) -> GroundContact {
        match caster.sweep_box(center, half_extents, DOWN, self.probe_depth, self.mask) {
            Some(hit) => GroundContact {
                hit: true,
                normal: hit.normal,
            },
            None => GroundContact::NONE,
        }
    }
}
