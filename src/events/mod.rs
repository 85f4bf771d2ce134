//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition event and the observer running hooks
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod gamestate;
pub mod switchdebug;
