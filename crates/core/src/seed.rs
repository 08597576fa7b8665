//! Reproducible description of a simulation run.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Default simulated seconds per frame (60 fps).
pub const DEFAULT_DELTA_TIME: f64 = 1.0 / 60.0;

/// Everything needed to reproduce a run: engine name, display bounds,
/// parameter overrides, PRNG seed, frame count, per-frame delta time, and
/// an optional fixed reference point (`None` means the bounds center).
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// trajectories and snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: usize,
    pub delta_time: f64,
    #[serde(default)]
    pub pointer: Option<[f64; 2]>,
}

impl Seed {
    /// Creates a seed with empty params, zero frames, the default frame
    /// delta, and a centered pointer.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            frames: 0,
            delta_time: DEFAULT_DELTA_TIME,
            pointer: None,
        }
    }

    /// Rejects zero dimensions and a non-finite or negative frame delta.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        if !self.delta_time.is_finite() {
            return Err(EngineError::NonFiniteParameter {
                name: "delta_time",
                value: self.delta_time,
            });
        }
        if self.delta_time < 0.0 {
            return Err(EngineError::NegativeParameter {
                name: "delta_time",
                value: self.delta_time,
            });
        }
        Ok(())
    }
}
