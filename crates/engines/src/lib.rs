#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations, plus the
//! CPU-side visualization path (grid sampling, raster, PNG snapshot).
//!
//! This crate sits between `flowfield-core` (which defines the `Engine`
//! trait) and the individual engine crates (`flowfield-magnet`). The CLI
//! depends on this crate so dispatch logic lives in exactly one place.

pub mod grid;
pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use flowfield_core::error::EngineError;
use flowfield_core::field::FieldFunction;
use flowfield_core::particle::Particle;
use flowfield_core::Engine;
use glam::DVec2;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["magnet"];

/// Enumeration of all available particle engines.
///
/// Wraps each engine implementation and delegates `Engine` trait methods.
/// Use [`EngineKind::from_name`] for string-based construction (CLI).
pub enum EngineKind {
    /// Quadratic "magnet" field with RK4 dynamics.
    Magnet(flowfield_magnet::MagnetFlow),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "magnet" => Ok(EngineKind::Magnet(flowfield_magnet::MagnetFlow::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn step(&mut self, reference: DVec2, delta_time: f64) -> Result<(), EngineError> {
        match self {
            EngineKind::Magnet(e) => e.step(reference, delta_time),
        }
    }

    fn particles(&self) -> &[Particle] {
        match self {
            EngineKind::Magnet(e) => e.particles(),
        }
    }

    fn field(&self) -> &dyn FieldFunction {
        match self {
            EngineKind::Magnet(e) => e.field(),
        }
    }

    fn bounds(&self) -> (f64, f64) {
        match self {
            EngineKind::Magnet(e) => e.bounds(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Magnet(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Magnet(e) => e.param_schema(),
        }
    }
}
