//! Player locomotion running inside the ECS: logic phase, physics phase,
//! movement and respawn, with effects observed through the audio queue,
//! spawned particles, signals and resources.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use maldimensional::components::boxcollider::BoxCollider;
use maldimensional::components::mapposition::MapPosition;
use maldimensional::components::particle::Particle;
use maldimensional::components::platform::{CollisionLayer, Platform};
use maldimensional::components::player::{LocomotionIntent, Player};
use maldimensional::components::rigidbody::RigidBody;
use maldimensional::components::signals::Signals;
use maldimensional::events::audio::AudioCmd;
use maldimensional::locomotion::effects::{
    PARAM_BOOSTING, PARAM_GROUNDED, PARAM_HAS_FUEL, PARAM_HORIZONTAL_SPEED,
};
use maldimensional::locomotion::sensor::GROUND_LAYER;
use maldimensional::locomotion::{
    AudioCue, Facing, LocomotionConfig, LocomotionController, LocomotionMode, PauseGate,
};
use maldimensional::resources::audio::init_audio_messages;
use maldimensional::resources::gameconfig::GameConfig;
use maldimensional::resources::gamestate::{GameStates, NextGameState, NextGameStates};
use maldimensional::resources::input::InputState;
use maldimensional::resources::loadingfader::LoadingFader;
use maldimensional::resources::platformlayout::{LevelLayout, PlatformLayout};
use maldimensional::resources::scrambleblink::ScrambleBlink;
use maldimensional::resources::worldtime::WorldTime;
use maldimensional::systems::movement::movement;
use maldimensional::systems::particleemitter::particle_emitter_system;
use maldimensional::systems::player::{
    player_logic_system, player_physics_system, respawn_fallen_players,
};
use maldimensional::systems::presentation::loading_fader_system;

const DT: f32 = 0.02;
const EPSILON: f32 = 1e-3;

const LEVEL: &str = r#"{
    "name": "harness",
    "platform_count": 1,
    "slots": [
        { "x": 200, "y": 60, "width": 40, "height": 8 },
        { "x": 300, "y": 60, "width": 40, "height": 8 }
    ]
}"#;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Harness {
    world: World,
    logic: Schedule,
    fixed: Schedule,
}

impl Harness {
    fn new() -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: DT,
            fixed_delta: DT,
            ..WorldTime::default()
        });
        world.insert_resource(InputState::default());
        world.insert_resource(GameConfig::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(ScrambleBlink::default());
        world.insert_resource(PlatformLayout::new(LevelLayout::parse(LEVEL).unwrap()));
        init_audio_messages(&mut world);

        let mut logic = Schedule::default();
        logic.add_systems(player_logic_system);

        let mut fixed = Schedule::default();
        fixed.add_systems(
            (
                player_physics_system,
                particle_emitter_system,
                movement,
                respawn_fallen_players,
            )
                .chain(),
        );

        Self {
            world,
            logic,
            fixed,
        }
    }

    /// Floor whose top edge is at y = 100.
    fn with_floor(mut self) -> Self {
        self.world.spawn((
            Platform { index: None },
            MapPosition::new(0.0, 100.0),
            BoxCollider::new(640.0, 20.0),
            CollisionLayer(GROUND_LAYER),
        ));
        self
    }

    fn spawn_player(&mut self, x: f32, y: f32, gate: PauseGate) -> Entity {
        let config = LocomotionConfig::default();
        let gravity = self.world.resource::<GameConfig>().gravity;
        self.world
            .spawn((
                MapPosition::new(x, y),
                BoxCollider::centered(config.collider_half_extents),
                RigidBody::with_gravity(gravity),
                Signals::default(),
                Player::new(LocomotionController::new(config, gate)),
            ))
            .id()
    }

    fn input(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    /// One rendered frame followed by one fixed tick.
    fn frame(&mut self) {
        self.logic.run(&mut self.world);
        self.fixed.run(&mut self.world);
        let mut input = self.input();
        input.jump.just_pressed = false;
        input.action_back.just_pressed = false;
    }

    fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame();
        }
    }

    fn press_jump(&mut self) {
        let mut input = self.input();
        input.jump.just_pressed = true;
        input.jump.active = true;
    }

    fn drain_audio(&mut self) -> Vec<AudioCmd> {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }

    fn particle_count(&mut self) -> usize {
        let mut query = self.world.query::<&Particle>();
        query.iter(&self.world).count()
    }

    fn player(&self, entity: Entity) -> &Player {
        self.world.get::<Player>(entity).unwrap()
    }

    fn position(&self, entity: Entity) -> Vector2 {
        self.world.get::<MapPosition>(entity).unwrap().pos
    }

    fn signals(&self, entity: Entity) -> &Signals {
        self.world.get::<Signals>(entity).unwrap()
    }
}

fn open_gate() -> PauseGate {
    let gate = PauseGate::new();
    gate.open();
    gate
}

fn count(cmds: &[AudioCmd], wanted: &AudioCmd) -> usize {
    cmds.iter().filter(|cmd| *cmd == wanted).count()
}

#[test]
fn paused_player_ignores_input_and_calls_nothing() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 90.0, PauseGate::new());
    h.press_jump();
    h.input().move_right.active = true;

    h.frames(3);

    assert!(h.drain_audio().is_empty());
    assert_eq!(h.particle_count(), 0);
    let signals = h.signals(player);
    assert!(signals.flags.is_empty());
    assert!(signals.scalars.is_empty());
    let p = h.player(player);
    assert_eq!(p.intent, LocomotionIntent::default());
    assert_eq!(p.controller.fuel().level(), p.controller.fuel().max());
    assert_eq!(p.controller.mode(), LocomotionMode::Grounded);
    assert!(approx_eq(h.position(player).x, 50.0));
}

#[test]
fn walking_right_moves_on_the_floor_and_animates() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 90.0, open_gate());
    h.input().move_right.active = true;

    h.frames(10);

    let pos = h.position(player);
    assert!(pos.x > 50.0);
    assert!(approx_eq(pos.y, 90.0));
    let signals = h.signals(player);
    assert!(signals.has_flag(PARAM_GROUNDED));
    assert!(!signals.has_flag(PARAM_BOOSTING));
    assert!(signals.has_flag(PARAM_HAS_FUEL));
    assert!(signals.get_scalar(PARAM_HORIZONTAL_SPEED).unwrap() > 0.0);
    assert_eq!(h.player(player).controller.facing(), Facing::Right);
    assert!(h.drain_audio().is_empty());
}

#[test]
fn walking_left_turns_the_player_around() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 90.0, open_gate());
    h.input().move_left.active = true;

    h.frame();

    assert_eq!(h.player(player).controller.facing(), Facing::Left);
}

#[test]
fn ground_jump_plays_jump_spawns_dust_and_rises() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 90.0, open_gate());
    h.frame();
    assert!(h.drain_audio().is_empty());

    h.press_jump();
    h.frame();

    let audio = h.drain_audio();
    assert_eq!(audio, vec![AudioCmd::play_cue(AudioCue::Jump)]);
    assert!(h.particle_count() > 0);
    assert!(h.position(player).y < 90.0);
    assert!(h.world.get::<RigidBody>(player).unwrap().velocity.y < 0.0);

    // Holding jump after a ground jump neither jumps again nor boosts.
    h.frames(3);
    let audio = h.drain_audio();
    assert_eq!(count(&audio, &AudioCmd::play_cue(AudioCue::Jump)), 0);
    assert_eq!(count(&audio, &AudioCmd::play_cue(AudioCue::Boosting)), 0);
}

#[test]
fn falling_onto_the_floor_lands_once() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 60.0, open_gate());

    h.frames(40);

    let audio = h.drain_audio();
    assert_eq!(count(&audio, &AudioCmd::play_cue(AudioCue::Landing)), 1);
    assert!(h.player(player).controller.is_grounded());
    assert!(approx_eq(h.position(player).y, 90.0));
    assert!(h.signals(player).has_flag(PARAM_GROUNDED));
}

#[test]
fn airborne_jump_scrambles_and_boosts() {
    let mut h = Harness::new().with_floor();
    let player = h.spawn_player(50.0, 40.0, open_gate());
    h.frame();
    assert_eq!(
        h.player(player).controller.mode(),
        LocomotionMode::AirborneBallistic
    );

    h.press_jump();
    h.frame();

    assert_eq!(
        h.drain_audio(),
        vec![
            AudioCmd::play_cue(AudioCue::Scramble),
            AudioCmd::play_cue(AudioCue::Boosting),
        ]
    );
    assert!(h.world.resource::<PlatformLayout>().is_pending());
    assert!(h.world.resource::<ScrambleBlink>().is_active());
    assert!(h.particle_count() > 0);
    let p = h.player(player);
    assert_eq!(p.controller.mode(), LocomotionMode::AirborneBoosting);
    assert!(p.controller.fuel().level() < p.controller.fuel().max());
    assert!(h.signals(player).has_flag(PARAM_BOOSTING));
}

#[test]
fn holding_boost_until_empty_stops_the_loop_once() {
    let mut h = Harness::new();
    let player = h.spawn_player(50.0, 40.0, open_gate());
    h.frame();
    h.press_jump();

    h.frames(200);

    let audio = h.drain_audio();
    assert_eq!(count(&audio, &AudioCmd::play_cue(AudioCue::Scramble)), 1);
    assert_eq!(count(&audio, &AudioCmd::play_cue(AudioCue::Boosting)), 1);
    assert_eq!(count(&audio, &AudioCmd::stop_cue(AudioCue::Boosting)), 1);
    let p = h.player(player);
    assert_eq!(p.controller.fuel().level(), p.controller.fuel().min());
    assert_eq!(p.controller.mode(), LocomotionMode::AirborneBallistic);
    assert!(!h.signals(player).has_flag(PARAM_HAS_FUEL));
    assert!(!h.signals(player).has_flag(PARAM_BOOSTING));
}

#[test]
fn menu_exit_returns_to_the_start_scene() {
    let mut h = Harness::new().with_floor();
    h.spawn_player(50.0, 90.0, open_gate());
    h.input().action_back.just_pressed = true;

    h.frame();

    assert_eq!(
        *h.world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Menu)
    );
    assert_eq!(
        h.drain_audio(),
        vec![
            AudioCmd::stop_cue(AudioCue::Theme),
            AudioCmd::play_cue(AudioCue::BackToMenu),
        ]
    );
}

#[test]
fn falling_below_the_kill_plane_respawns_at_spawn() {
    let mut h = Harness::new();
    let player = h.spawn_player(50.0, 500.0, open_gate());

    h.frame();

    let spawn = LocomotionConfig::default().spawn_point;
    assert_eq!(h.position(player), spawn);
    assert_eq!(
        h.world.get::<RigidBody>(player).unwrap().velocity,
        Vector2 { x: 0.0, y: 0.0 }
    );
    assert_eq!(h.player(player).controller.mode(), LocomotionMode::Grounded);
}

#[test]
fn paused_player_below_the_kill_plane_is_not_respawned() {
    let mut h = Harness::new();
    let player = h.spawn_player(50.0, 500.0, PauseGate::new());

    h.frames(3);

    let spawn = LocomotionConfig::default().spawn_point;
    let position = h.position(player);
    assert_ne!(position, spawn);
    assert!(position.y >= 500.0);
    assert!(h.drain_audio().is_empty());
}

#[test]
fn loading_fader_unpauses_the_player_once_done() {
    let mut h = Harness::new().with_floor();
    let gate = PauseGate::new();
    let player = h.spawn_player(50.0, 90.0, gate.clone());
    h.world.insert_resource(LoadingFader::new(0.05, gate));
    let mut fade = Schedule::default();
    fade.add_systems(loading_fader_system);

    fade.run(&mut h.world);
    assert!(h.player(player).controller.is_paused());
    fade.run(&mut h.world);
    fade.run(&mut h.world);
    assert!(!h.player(player).controller.is_paused());

    h.input().move_right.active = true;
    h.frames(5);
    assert!(h.position(player).x > 50.0);
}
