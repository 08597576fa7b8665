//! PNG snapshot of a simulation scene.
//!
//! Feature-gated behind `png` (default on) so consumers that only need
//! the registry or the raw raster avoid the `image` dependency.

use crate::grid::FieldSample;
use crate::raster::scene_to_rgba;
use flowfield_core::error::EngineError;
use flowfield_core::particle::Particle;
use std::path::Path;

/// Rasterizes the scene and writes it as a PNG.
///
/// Returns `EngineError::InvalidDimensions` if the dimensions are zero or
/// overflow `u32`, or `EngineError::Io` on encode/write failure.
pub fn write_png(
    particles: &[Particle],
    samples: &[FieldSample],
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), EngineError> {
    let rgba = scene_to_rgba(particles, samples, width, height)?;
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
