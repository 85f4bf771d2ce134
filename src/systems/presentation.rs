//! Screen effects that run on the frame clock.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::loadingfader::LoadingFader;
use crate::resources::scrambleblink::ScrambleBlink;
use crate::resources::worldtime::WorldTime;

pub fn scramble_blink_system(time: Res<WorldTime>, blink: Option<ResMut<ScrambleBlink>>) {
    if let Some(mut blink) = blink
        && blink.is_active()
    {
        blink.tick(time.delta);
    }
}

/// Advance the level fade-in; opens the pause gate when it completes.
pub fn loading_fader_system(time: Res<WorldTime>, fader: Option<ResMut<LoadingFader>>) {
    let Some(mut fader) = fader else {
        return;
    };
    if fader.tick(time.delta) {
        info!("Level loaded after {:.2}s", fader.elapsed);
    }
}
