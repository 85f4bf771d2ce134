//! Locomotion events and their presentation.
//!
//! The state machine never calls audio, particles or animation directly. Each
//! tick it returns an ordered list of [`LocomotionEvent`]s, and [`dispatch`]
//! turns that list into calls on an [`EffectSink`]. The ECS implements the
//! sink on top of messages and resources; tests implement it with a recorder.

use raylib::prelude::Vector2;
use smallvec::SmallVec;

/// Scene loaded when the player leaves the level.
pub const START_SCENE: &str = "StartScene";

/// Scene holding the playable level.
pub const GAME_SCENE: &str = "GameScene";

/// Animation parameter names.
pub const PARAM_GROUNDED: &str = "Grounded";
pub const PARAM_BOOSTING: &str = "Boosting";
pub const PARAM_HAS_FUEL: &str = "HasFuel";
pub const PARAM_HORIZONTAL_SPEED: &str = "HorizontalSpeed";

/// Audio cues the controller can start or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Theme,
    Jump,
    Landing,
    Boosting,
    Scramble,
    BackToMenu,
}

impl AudioCue {
    pub const ALL: [AudioCue; 6] = [
        AudioCue::Theme,
        AudioCue::Jump,
        AudioCue::Landing,
        AudioCue::Boosting,
        AudioCue::Scramble,
        AudioCue::BackToMenu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Theme => "Theme",
            AudioCue::Jump => "Jump",
            AudioCue::Landing => "Landing",
            AudioCue::Boosting => "Boosting",
            AudioCue::Scramble => "Scramble",
            AudioCue::BackToMenu => "BackToMenu",
        }
    }

    /// Looping cues play until stopped; the rest are one-shots.
    pub fn is_looping(self) -> bool {
        matches!(self, AudioCue::Theme | AudioCue::Boosting)
    }
}

/// Particle bursts the controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticlePrefab {
    Dust,
    Smoke,
}

/// Continuous animation parameters, refreshed every unpaused physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub grounded: bool,
    pub boosting: bool,
    pub has_fuel: bool,
    pub horizontal_speed: f32,
}

/// Something that happened to the actor during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionEvent {
    /// Grounded went from false to true.
    Landed,
    /// A jump edge while grounded applied the jump impulse.
    GroundJumped,
    /// A jump edge while airborne engaged boost.
    Scrambled,
    /// Boost became active after a tick without boost.
    BoostStarted,
    /// Boost stopped for any reason.
    BoostStopped,
    /// The menu-exit edge was seen in the logic phase.
    ExitedToMenu,
    Animate(AnimationParams),
}

/// Events of one tick, in emission order.
pub type LocomotionEvents = SmallVec<[LocomotionEvent; 8]>;

/// World positions where bursts appear for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectAnchors {
    pub dust: Vector2,
    pub smoke: Vector2,
}

/// Presentation collaborators. All calls are fire-and-forget.
pub trait EffectSink {
    fn set_bool(&mut self, name: &'static str, value: bool);
    fn set_float(&mut self, name: &'static str, value: f32);
    fn play(&mut self, cue: AudioCue);
    fn stop(&mut self, cue: AudioCue);
    fn spawn(&mut self, prefab: ParticlePrefab, position: Vector2);
    fn load_scene(&mut self, name: &str);
    fn respawn_platforms(&mut self);
    fn scramble_blink(&mut self);
}

/// Execute `events` in order against `sink`.
pub fn dispatch(events: &[LocomotionEvent], anchors: EffectAnchors, sink: &mut impl EffectSink) {
    for event in events {
        match *event {
            LocomotionEvent::Landed => {
                sink.spawn(ParticlePrefab::Dust, anchors.dust);
                sink.play(AudioCue::Landing);
            }
            LocomotionEvent::GroundJumped => {
                sink.play(AudioCue::Jump);
                sink.spawn(ParticlePrefab::Dust, anchors.dust);
            }
            LocomotionEvent::Scrambled => {
                sink.respawn_platforms();
                sink.scramble_blink();
                sink.play(AudioCue::Scramble);
            }
            LocomotionEvent::BoostStarted => {
                sink.spawn(ParticlePrefab::Smoke, anchors.smoke);
                sink.play(AudioCue::Boosting);
            }
            LocomotionEvent::BoostStopped => sink.stop(AudioCue::Boosting),
            LocomotionEvent::ExitedToMenu => {
                sink.stop(AudioCue::Theme);
                sink.play(AudioCue::BackToMenu);
                sink.load_scene(START_SCENE);
            }
            LocomotionEvent::Animate(params) => {
                sink.set_bool(PARAM_GROUNDED, params.grounded);
                sink.set_bool(PARAM_BOOSTING, params.boosting);
                sink.set_bool(PARAM_HAS_FUEL, params.has_fuel);
                sink.set_float(PARAM_HORIZONTAL_SPEED, params.horizontal_speed);
            }
        }
    }
}
