//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`audio`] – bridge to the background audio thread
//! - [`debugmode`] – presence toggles the debug overlay
//! - [`gameconfig`] – INI-backed configuration
//! - [`gamestate`] – current and pending high-level state
//! - [`input`] – per-frame keyboard state
//! - [`loadingfader`] – fade-in that opens the scene's pause gate
//! - [`platformlayout`] – level slots and random platform re-layout
//! - [`scrambleblink`] – flicker shown after a scramble
//! - [`systemsstore`] – state hook registry
//! - [`worldtime`] – frame delta and fixed-step accumulator

pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod loadingfader;
pub mod platformlayout;
pub mod scrambleblink;
pub mod systemsstore;
pub mod worldtime;
