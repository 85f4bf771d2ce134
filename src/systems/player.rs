//! Player locomotion systems.
//!
//! The [`LocomotionController`](crate::locomotion::LocomotionController)
//! inside [`Player`] runs in two phases:
//!
//! - [`player_logic_system`] once per rendered frame: records input into the
//!   intent, recharges fuel and handles the menu exit.
//! - [`player_physics_system`] once per fixed tick, before `movement`: probes
//!   the ground against the platforms and updates the body velocity.
//!
//! [`respawn_fallen_players`] runs after `movement` and puts players that fell
//! below the kill plane back at their spawn point.
//!
//! Events returned by the controller are dispatched to an [`ActorSink`], which
//! turns them into audio commands, burst emitters, scene changes, platform
//! re-layouts and animation signals.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::ParticleEmitter;
use crate::components::platform::{CollisionLayer, Platform};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sceneentity::SceneEntity;
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;
use crate::locomotion::{AudioCue, EffectSink, ParticlePrefab, dispatch};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::platformlayout::PlatformLayout;
use crate::resources::scrambleblink::ScrambleBlink;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{StaticCollider, StaticColliders};

/// World access shared by every effect of a tick.
#[derive(SystemParam)]
pub struct EffectSinks<'w, 's> {
    audio: MessageWriter<'w, AudioCmd>,
    commands: Commands<'w, 's>,
    next_state: Option<ResMut<'w, NextGameState>>,
    layout: Option<ResMut<'w, PlatformLayout>>,
    blink: Option<ResMut<'w, ScrambleBlink>>,
}

/// [`EffectSink`] for one actor.
pub struct ActorSink<'a, 'w, 's> {
    sinks: &'a mut EffectSinks<'w, 's>,
    signals: Option<&'a mut Signals>,
}

impl<'a, 'w, 's> ActorSink<'a, 'w, 's> {
    pub fn new(sinks: &'a mut EffectSinks<'w, 's>, signals: Option<&'a mut Signals>) -> Self {
        Self { sinks, signals }
    }
}

impl EffectSink for ActorSink<'_, '_, '_> {
    fn set_bool(&mut self, name: &'static str, value: bool) {
        if let Some(signals) = self.signals.as_deref_mut() {
            signals.set_bool(name, value);
        }
    }

    fn set_float(&mut self, name: &'static str, value: f32) {
        if let Some(signals) = self.signals.as_deref_mut() {
            signals.set_scalar(name, value);
        }
    }

    fn play(&mut self, cue: AudioCue) {
        self.sinks.audio.write(AudioCmd::play_cue(cue));
    }

    fn stop(&mut self, cue: AudioCue) {
        self.sinks.audio.write(AudioCmd::stop_cue(cue));
    }

    fn spawn(&mut self, prefab: ParticlePrefab, position: Vector2) {
        self.sinks.commands.spawn((
            MapPosition::from_vec(position),
            ParticleEmitter::burst(prefab),
            SceneEntity,
        ));
    }

    fn load_scene(&mut self, name: &str) {
        let Some(state) = GameStates::from_scene(name) else {
            warn!("Unknown scene '{}'", name);
            return;
        };
        match self.sinks.next_state.as_deref_mut() {
            Some(next) => next.set(state),
            None => warn!("NextGameState missing, cannot load scene '{}'", name),
        }
    }

    fn respawn_platforms(&mut self) {
        if let Some(layout) = self.sinks.layout.as_deref_mut() {
            layout.request_relayout();
        }
    }

    fn scramble_blink(&mut self) {
        if let Some(blink) = self.sinks.blink.as_deref_mut() {
            blink.trigger();
        }
    }
}

/// Variable-rate phase of every player.
pub fn player_logic_system(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut players: Query<(&mut Player, &MapPosition, Option<&mut Signals>)>,
    mut sinks: EffectSinks,
) {
    let move_axis = input.horizontal_axis();
    for (mut player, position, mut signals) in players.iter_mut() {
        let player = &mut *player;
        if player.controller.is_paused() {
            // Input seen while loading is dropped, not replayed.
            player.intent.clear();
            continue;
        }
        player.intent.record(
            move_axis,
            input.jump.just_pressed,
            input.jump.active,
            input.action_back.just_pressed,
        );
        let events = player
            .controller
            .logic_tick(player.intent.menu_exit, time.delta);
        if events.is_empty() {
            continue;
        }
        let anchors = player.controller.anchors(position.pos);
        dispatch(
            &events,
            anchors,
            &mut ActorSink::new(&mut sinks, signals.as_deref_mut()),
        );
    }
}

/// Fixed-rate phase of every player.
pub fn player_physics_system(
    time: Res<WorldTime>,
    platforms: Query<(&MapPosition, &BoxCollider, &CollisionLayer), With<Platform>>,
    mut players: Query<(
        &mut Player,
        &MapPosition,
        &BoxCollider,
        &mut RigidBody,
        Option<&mut Signals>,
    )>,
    mut sinks: EffectSinks,
) {
    let colliders: StaticColliders = platforms
        .iter()
        .map(|(position, collider, layer)| {
            let (min, max) = collider.aabb(position.pos);
            StaticCollider {
                min,
                max,
                layer: layer.0,
            }
        })
        .collect();

    for (mut player, position, collider, mut body, mut signals) in players.iter_mut() {
        let player = &mut *player;
        let input = player.intent.take_input();
        let center = collider.center(position.pos);
        let events = player.controller.physics_tick(
            &colliders,
            center,
            input,
            &mut body.velocity,
            time.fixed_delta,
        );
        if events.is_empty() {
            continue;
        }
        let anchors = player.controller.anchors(position.pos);
        dispatch(
            &events,
            anchors,
            &mut ActorSink::new(&mut sinks, signals.as_deref_mut()),
        );
    }
}

/// Respawn unpaused players whose position dropped below the kill plane.
pub fn respawn_fallen_players(
    config: Res<GameConfig>,
    mut players: Query<(
        &mut Player,
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut Signals>,
    )>,
    mut sinks: EffectSinks,
) {
    for (mut player, mut position, mut body, mut signals) in players.iter_mut() {
        if player.controller.is_paused() || position.pos.y <= config.kill_plane_y {
            continue;
        }
        debug!("Player fell below y={:.1}", config.kill_plane_y);
        let events = player
            .controller
            .respawn(&mut position.pos, &mut body.velocity);
        let anchors = player.controller.anchors(position.pos);
        dispatch(
            &events,
            anchors,
            &mut ActorSink::new(&mut sinks, signals.as_deref_mut()),
        );
    }
}
