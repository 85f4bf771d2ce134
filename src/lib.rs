//! Maldimensional library.
//!
//! Exposes the locomotion core and the game's ECS components, resources,
//! systems and events for the binary and the integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod locomotion;
pub mod resources;
pub mod systems;
