//! Engine systems.
//!
//! Systems run in three schedules built by `main`: `update` once per
//! rendered frame, `fixed` zero or more times per frame at the fixed rate,
//! and `late` for drawing.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`collision`] – static collider snapshot answering ground sweeps
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate forces and velocities, push bodies out of platforms
//! - [`particleemitter`] – turn burst requests into particles
//! - [`platforms`] – apply a requested platform re-layout
//! - [`player`] – locomotion logic/physics phases and respawn
//! - [`presentation`] – scramble flicker and loading fade timers
//! - [`render`] – draw world, overlays and debug info using Raylib
//! - [`time`] – update frame time and plan fixed ticks
//! - [`ttl`] – despawn expired particles

pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod particleemitter;
pub mod platforms;
pub mod player;
pub mod presentation;
pub mod render;
pub mod time;
pub mod ttl;
