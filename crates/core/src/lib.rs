#![deny(unsafe_code)]
//! Core types for the flowfield particle simulation.
//!
//! Provides the `Engine` trait, the `FieldFunction` trait with the
//! `MagnetField` implementation, the `State`/`Derivative` pair and the RK4
//! `integrate_step`, `Particle`, `Xorshift64` PRNG, `Seed`, and parameter
//! helpers.

pub mod engine;
pub mod error;
pub mod field;
pub mod integrator;
pub mod params;
pub mod particle;
pub mod prng;
pub mod seed;
pub mod state;

pub use engine::Engine;
pub use error::EngineError;
pub use field::{FieldFunction, MagnetField};
pub use integrator::integrate_step;
pub use particle::Particle;
pub use prng::Xorshift64;
pub use seed::Seed;
pub use state::{evaluate, Derivative, State};
