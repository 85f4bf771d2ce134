//! Static platforms the player can stand on.

use bevy_ecs::prelude::Component;

/// A platform placed by the level layout.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Index into [`PlatformLayout::active`]. `None` for the fixed floor,
    /// which never moves.
    ///
    /// [`PlatformLayout::active`]: crate::resources::platformlayout::PlatformLayout::active
    pub index: Option<usize>,
}

/// Collision layer bits of a static collider.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionLayer(pub u32);

impl CollisionLayer {
    pub fn intersects(self, mask: u32) -> bool {
        self.0 & mask != 0
    }
}
