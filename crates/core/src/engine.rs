//! The core `Engine` trait implemented by every particle simulation.
//!
//! The trait is object-safe so engines can be driven as `dyn Engine` for
//! runtime switching between simulations.

use crate::error::EngineError;
use crate::field::FieldFunction;
use crate::particle::Particle;
use glam::DVec2;
use serde_json::Value;

/// Core trait for frame-driven particle simulations.
///
/// One [`step`](Engine::step) call advances every particle by `delta_time`
/// seconds with the field anchored to `reference`. The engine is the sole
/// owner of its particle storage; callers only ever see a read-only slice,
/// never internal references they could mutate.
pub trait Engine {
    /// Advances the simulation by one frame.
    ///
    /// `reference` is the point the field is centered on this frame (e.g.
    /// a pointer position); `delta_time` is the frame's duration in
    /// seconds. How out-of-range deltas are treated is an engine boundary
    /// policy, not the caller's concern.
    fn step(&mut self, reference: DVec2, delta_time: f64) -> Result<(), EngineError>;

    /// Read-only snapshot of the particle collection, in stable order.
    fn particles(&self) -> &[Particle];

    /// The field driving the particles, exposed for sampling and
    /// visualization.
    fn field(&self) -> &dyn FieldFunction;

    /// Display bounds (width, height) the particles were seeded into.
    fn bounds(&self) -> (f64, f64);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges,
    /// and defaults.
    fn param_schema(&self) -> Value;
}
