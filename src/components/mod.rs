//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`particle`] – drawable particle spawned by bursts
//! - [`particleemitter`] – one-shot particle burst request
//! - [`platform`] – static platforms and collision layers
//! - [`player`] – the locomotion-controlled actor and its input intent
//! - [`rigidbody`] – kinematic body with named forces
//! - [`sceneentity`] – marker for entities despawned on scene change
//! - [`signals`] – per-entity animation parameters
//! - [`ttl`] – time-to-live for automatic despawn

pub mod boxcollider;
pub mod mapposition;
pub mod particle;
pub mod particleemitter;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod sceneentity;
pub mod signals;
pub mod ttl;
