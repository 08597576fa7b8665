//! Error types for the flowfield core.

use thiserror::Error;

/// Errors produced by engine construction, sampling, and snapshot operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating an engine or a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A configuration value was NaN or infinite.
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// A configuration value had to be strictly positive.
    #[error("parameter '{name}' must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    /// A configuration value was negative where only zero or more is allowed.
    #[error("parameter '{name}' must not be negative, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    /// The sub-step count was zero.
    #[error("substeps must be at least 1, got {0}")]
    InvalidSubsteps(usize),

    /// A requested engine name was not recognized by the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// An I/O failure while writing a snapshot or seed file.
    #[error("io error: {0}")]
    Io(String),
}
