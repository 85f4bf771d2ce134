//! Platform re-layout.
//!
//! A scramble only flags the [`PlatformLayout`]; [`apply_platform_layout`]
//! picks the new slots and moves the indexed platforms on its next run. The
//! floor (`Platform { index: None }`) never moves.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::warn;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::resources::platformlayout::PlatformLayout;

pub fn apply_platform_layout(
    layout: Option<ResMut<PlatformLayout>>,
    mut platforms: Query<(&Platform, &mut MapPosition, &mut BoxCollider)>,
    mut rng: Local<Rng>,
) {
    let Some(mut layout) = layout else {
        return;
    };
    if !layout.is_pending() {
        return;
    }
    layout.relayout(&mut rng);

    for (platform, mut position, mut collider) in platforms.iter_mut() {
        let Some(index) = platform.index else {
            continue;
        };
        match layout.slot_for(index) {
            Some(slot) => {
                position.pos.x = slot.x;
                position.pos.y = slot.y;
                *collider = BoxCollider::new(slot.width, slot.height);
            }
            None => warn!("No slot for platform {}", index),
        }
    }
}
