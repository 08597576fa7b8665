//! Field sampling on a regular grid for visualization.
//!
//! A windowed front end draws the field as a grid of arrows; this module
//! supplies the samples. [`sample_grid`] walks points spaced `(sx, sy)`
//! apart starting at the origin and evaluates the field at each point
//! relative to the reference, yielding exactly
//! `ceil(width / sx) * ceil(height / sy)` samples regardless of engine
//! internals.

use flowfield_core::error::EngineError;
use flowfield_core::field::FieldFunction;
use glam::DVec2;

/// One field probe: the absolute grid position and the raw field vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub position: DVec2,
    pub vector: DVec2,
}

impl FieldSample {
    /// Unit direction of the field here; the zero vector stays the zero
    /// vector instead of going NaN.
    pub fn direction(&self) -> DVec2 {
        self.vector.normalize_or_zero()
    }
}

/// Samples `field` at every grid point of a `width x height` area.
///
/// Grid points sit at `(i * sx, j * sy)` for `i < ceil(width / sx)`,
/// `j < ceil(height / sy)`, in row-major order (y outer, x inner); the
/// field is evaluated at each point relative to `reference`.
///
/// Bounds and spacings must be positive and finite.
pub fn sample_grid(
    field: &dyn FieldFunction,
    reference: DVec2,
    width: f64,
    height: f64,
    spacing: DVec2,
) -> Result<Vec<FieldSample>, EngineError> {
    for (name, value) in [
        ("width", width),
        ("height", height),
        ("spacing_x", spacing.x),
        ("spacing_y", spacing.y),
    ] {
        if !value.is_finite() {
            return Err(EngineError::NonFiniteParameter { name, value });
        }
        if value <= 0.0 {
            return Err(EngineError::NonPositiveParameter { name, value });
        }
    }

    let cols = (width / spacing.x).ceil() as usize;
    let rows = (height / spacing.y).ceil() as usize;
    let mut samples = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            let position = DVec2::new(i as f64 * spacing.x, j as f64 * spacing.y);
            samples.push(FieldSample {
                position,
                vector: field.sample(position - reference),
            });
        }
    }
    Ok(samples)
}
