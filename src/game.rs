//! State hooks and scene setup.
//!
//! `main` registers the hook systems below in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore); the
//! game-state observer runs them on transitions:
//!
//! | transition       | hook            |
//! |------------------|-----------------|
//! | enter `Setup`    | [`setup`]       |
//! | enter `Menu`     | [`enter_menu`]  |
//! | enter `Playing`  | [`enter_play`]  |
//! | enter `Quitting` | [`quit_game`]   |
//! | leave a scene    | [`clean_scene`] |

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::platform::{CollisionLayer, Platform};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sceneentity::SceneEntity;
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;
use crate::locomotion::sensor::GROUND_LAYER;
use crate::locomotion::{AudioCue, LocomotionController, PauseGate};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::loadingfader::LoadingFader;
use crate::resources::platformlayout::{PlatformLayout, PlatformSlot};
use crate::resources::scrambleblink::ScrambleBlink;

pub const AUDIO_DIR: &str = "./assets/audio";

/// Queue every audio cue for loading, then go to the menu.
pub fn setup(mut next_state: ResMut<NextGameState>, mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    audio_cmd_writer.write_batch(AudioCue::ALL.map(|cue| AudioCmd::load_cue(cue, AUDIO_DIR)));
    next_state.set(GameStates::Menu);
}

pub fn enter_menu() {
    info!("Title screen");
}

/// Menu keys: confirm starts the level, back quits.
pub fn menu_input_system(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.action_confirm.just_pressed {
        next_state.set(GameStates::Playing);
    } else if input.action_back.just_pressed {
        next_state.set(GameStates::Quitting);
    }
}

fn spawn_platform(commands: &mut Commands, slot: PlatformSlot, index: Option<usize>) {
    commands.spawn((
        Platform { index },
        MapPosition::new(slot.x, slot.y),
        BoxCollider::new(slot.width, slot.height),
        CollisionLayer(GROUND_LAYER),
        SceneEntity,
    ));
}

/// Build the level: fresh pause gate and fade-in, platforms, the player and
/// the theme.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    layout: Res<PlatformLayout>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let gate = PauseGate::new();
    commands.insert_resource(LoadingFader::new(config.load_fade_seconds, gate.clone()));
    commands.insert_resource(ScrambleBlink::default());

    let layout = PlatformLayout::new(layout.level.clone());
    if let Some(floor) = layout.level.floor {
        spawn_platform(&mut commands, floor, None);
    }
    for index in 0..layout.active.len() {
        if let Some(slot) = layout.slot_for(index) {
            spawn_platform(&mut commands, slot, Some(index));
        }
    }
    info!(
        "Level '{}' with {} platforms",
        layout.level.name,
        layout.active.len()
    );
    commands.insert_resource(layout);

    let player = &config.player;
    commands.spawn((
        Player::new(LocomotionController::new(player.clone(), gate)),
        MapPosition::from_vec(player.spawn_point),
        BoxCollider::centered(player.collider_half_extents),
        RigidBody::with_gravity(config.gravity),
        Signals::default(),
        SceneEntity,
    ));

    audio_cmd_writer.write(AudioCmd::play_cue(AudioCue::Theme));
}

pub fn quit_game(mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    info!("Quitting");
    audio_cmd_writer.write(AudioCmd::stop_cue(AudioCue::Theme));
}

/// Despawn everything the scene spawned and drop its per-scene resources.
pub fn clean_scene(
    mut commands: Commands,
    query: Query<Entity, With<SceneEntity>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    commands.remove_resource::<LoadingFader>();
    commands.remove_resource::<ScrambleBlink>();
    // A loop left running by a boost cut short by the scene change.
    audio_cmd_writer.write(AudioCmd::stop_cue(AudioCue::Boosting));
    debug!("Despawned {} scene entities", count);
}
