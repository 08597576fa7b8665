//! Pure CPU rasterization of a simulation scene into an RGBA8 buffer.
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! other consumer share the same painting routine.

use crate::grid::FieldSample;
use flowfield_core::error::EngineError;
use flowfield_core::particle::Particle;
use glam::DVec2;

/// Drawn length of one field direction segment, in pixels.
const VECTOR_LENGTH: f64 = 15.0;
/// Particle disc radius, in pixels.
const PARTICLE_RADIUS: i64 = 2;

const BACKGROUND: [u8; 4] = [245, 245, 245, 255];
const FIELD_COLOR: [u8; 4] = [0, 121, 241, 255];
const PARTICLE_COLOR: [u8; 4] = [230, 41, 55, 255];

/// Paints field samples (fixed-length direction segments) and particles
/// (filled discs) onto a `width x height` RGBA8 buffer.
///
/// Geometry outside the buffer is clipped pixel by pixel, so particles
/// that wandered off screen are simply not drawn. A zero-vector field
/// sample has no direction and paints nothing.
pub fn scene_to_rgba(
    particles: &[Particle],
    samples: &[FieldSample],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    let mut buf = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        buf.extend_from_slice(&BACKGROUND);
    }

    for sample in samples {
        let dir = sample.direction();
        if dir == DVec2::ZERO {
            continue;
        }
        let steps = VECTOR_LENGTH.ceil() as usize;
        for t in 0..=steps {
            let p = sample.position + dir * t as f64;
            put_pixel(
                &mut buf,
                width,
                height,
                p.x.round() as i64,
                p.y.round() as i64,
                FIELD_COLOR,
            );
        }
    }

    for particle in particles {
        let cx = particle.position.x.round() as i64;
        let cy = particle.position.y.round() as i64;
        for dy in -PARTICLE_RADIUS..=PARTICLE_RADIUS {
            for dx in -PARTICLE_RADIUS..=PARTICLE_RADIUS {
                if dx * dx + dy * dy <= PARTICLE_RADIUS * PARTICLE_RADIUS {
                    put_pixel(&mut buf, width, height, cx + dx, cy + dy, PARTICLE_COLOR);
                }
            }
        }
    }

    Ok(buf)
}

/// Writes one RGBA pixel, ignoring coordinates outside the buffer.
fn put_pixel(buf: &mut [u8], width: usize, height: usize, x: i64, y: i64, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 4;
    buf[idx..idx + 4].copy_from_slice(&color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * width + x) * 4;
        [buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]
    }

    #[test]
    fn buffer_has_rgba_length() {
        let buf = scene_to_rgba(&[], &[], 32, 16).unwrap();
        assert_eq!(buf.len(), 32 * 16 * 4);
    }

    #[test]
    fn zero_dimensions_return_error() {
        assert!(matches!(
            scene_to_rgba(&[], &[], 0, 16),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(scene_to_rgba(&[], &[], 16, 0).is_err());
    }

    #[test]
    fn empty_scene_is_all_background() {
        let buf = scene_to_rgba(&[], &[], 8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(pixel(&buf, 8, x, y), BACKGROUND);
            }
        }
    }

    #[test]
    fn particle_paints_a_disc_at_its_position() {
        let p = Particle::at_rest(DVec2::new(16.0, 16.0));
        let buf = scene_to_rgba(&[p], &[], 32, 32).unwrap();
        assert_eq!(pixel(&buf, 32, 16, 16), PARTICLE_COLOR);
        assert_eq!(pixel(&buf, 32, 18, 16), PARTICLE_COLOR);
        assert_eq!(pixel(&buf, 32, 16, 14), PARTICLE_COLOR);
        // Corner of the bounding square is outside the disc.
        assert_eq!(pixel(&buf, 32, 18, 18), BACKGROUND);
    }

    #[test]
    fn off_screen_particle_is_clipped() {
        let p = Particle::at_rest(DVec2::new(-100.0, 4000.0));
        let buf = scene_to_rgba(&[p], &[], 16, 16).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(pixel(&buf, 16, x, y), BACKGROUND);
            }
        }
    }

    #[test]
    fn particle_near_the_edge_is_partially_drawn() {
        let p = Particle::at_rest(DVec2::new(0.0, 0.0));
        let buf = scene_to_rgba(&[p], &[], 16, 16).unwrap();
        assert_eq!(pixel(&buf, 16, 0, 0), PARTICLE_COLOR);
        assert_eq!(pixel(&buf, 16, 2, 0), PARTICLE_COLOR);
    }

    #[test]
    fn field_sample_paints_a_segment_along_its_direction() {
        let sample = FieldSample {
            position: DVec2::new(4.0, 10.0),
            vector: DVec2::new(5.0, 0.0),
        };
        let buf = scene_to_rgba(&[], &[sample], 32, 32).unwrap();
        // Horizontal run of VECTOR_LENGTH pixels starting at the sample.
        assert_eq!(pixel(&buf, 32, 4, 10), FIELD_COLOR);
        assert_eq!(pixel(&buf, 32, 12, 10), FIELD_COLOR);
        assert_eq!(pixel(&buf, 32, 19, 10), FIELD_COLOR);
        assert_eq!(pixel(&buf, 32, 4, 11), BACKGROUND);
        assert_eq!(pixel(&buf, 32, 25, 10), BACKGROUND);
    }

    #[test]
    fn zero_vector_sample_paints_nothing() {
        let sample = FieldSample {
            position: DVec2::new(8.0, 8.0),
            vector: DVec2::ZERO,
        };
        let buf = scene_to_rgba(&[], &[sample], 16, 16).unwrap();
        assert_eq!(pixel(&buf, 16, 8, 8), BACKGROUND);
    }

    #[test]
    fn particles_draw_over_field_segments() {
        let sample = FieldSample {
            position: DVec2::new(0.0, 8.0),
            vector: DVec2::new(1.0, 0.0),
        };
        let p = Particle::at_rest(DVec2::new(8.0, 8.0));
        let buf = scene_to_rgba(&[p], &[sample], 32, 32).unwrap();
        assert_eq!(pixel(&buf, 32, 8, 8), PARTICLE_COLOR);
    }
}
