//! Character locomotion core.
//!
//! Engine-independent logic that turns per-tick input into motion for the
//! player actor. Nothing in here touches the ECS world, Raylib or the audio
//! thread: collaborators are reached through the [`sensor::ShapeCaster`] and
//! [`effects::EffectSink`] traits, which the systems in
//! [`crate::systems::player`] implement on top of the world.
//!
//! Submodules (leaves first):
//! - [`config`] – immutable, validated tuning values for one actor archetype
//! - [`gate`] – one-shot pause latch opened when the scene finished loading
//! - [`sensor`] – downward box sweep that decides whether the actor stands
//! - [`fuel`] – bounded boost fuel with consumption and recharge
//! - [`smoothing`] – critically damped velocity smoothing
//! - [`machine`] – the grounded / airborne / boosting state machine
//! - [`effects`] – events emitted per tick and their dispatch to sinks
//!
//! Coordinates follow Raylib screen space: X grows right, Y grows down, so
//! "up" is `(0, -1)`.

pub mod config;
pub mod effects;
pub mod fuel;
pub mod gate;
pub mod machine;
pub mod sensor;
pub mod smoothing;

pub use config::LocomotionConfig;
pub use effects::{
    AnimationParams, AudioCue, EffectAnchors, EffectSink, LocomotionEvent, LocomotionEvents,
    ParticlePrefab, dispatch,
};
pub use fuel::FuelGauge;
pub use gate::PauseGate;
pub use machine::{Facing, LocomotionController, LocomotionInput, LocomotionMode};
pub use sensor::{GroundContact, GroundSensor, ShapeCaster, SweepHit};
pub use smoothing::VelocitySmoother;
