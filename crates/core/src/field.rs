//! Analytic 2D vector fields centered on a movable reference point.
//!
//! A [`FieldFunction`] maps a position *relative to the reference point* to
//! a field vector, which the integrator treats as an acceleration. All
//! implementations are pure and deterministic: same input, same output.

use glam::DVec2;

/// A deterministic mapping from a relative position to a 2D field vector.
///
/// Implementations must be total over finite inputs — no NaN or infinity
/// may come out of the field itself, including at the zero vector.
///
/// This trait is **object-safe**: `&dyn FieldFunction` works for runtime
/// dispatch and keeps the integrator independent of the concrete field.
pub trait FieldFunction: Send + Sync {
    /// Samples the field at `v`, expressed relative to the reference point.
    fn sample(&self, v: DVec2) -> DVec2;
}

/// The "magnet" field: the complex square `(x + iy)²` split into real and
/// imaginary parts, shifted by `magnet_length` and uniformly scaled:
///
/// ```text
/// Vx = x² - y² - magnet_length
/// Vy = 2xy
/// sample(v) = strength * (Vx, Vy)
/// ```
///
/// Both components are invariant under a simultaneous sign flip of x and y,
/// so the field is even: `sample(-v) == sample(v)` exactly. The result is a
/// quadrupole-like pattern around the reference point whose magnitude grows
/// with distance; `Vx` crosses zero near `|v| = sqrt(magnet_length)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetField {
    /// Shift constant of the field polynomial.
    pub magnet_length: f64,
    /// Uniform scale applied to both components.
    pub strength: f64,
}

impl MagnetField {
    /// Creates a field with the given shift and scale constants.
    pub fn new(magnet_length: f64, strength: f64) -> Self {
        Self {
            magnet_length,
            strength,
        }
    }
}

impl FieldFunction for MagnetField {
    fn sample(&self, v: DVec2) -> DVec2 {
        let vx = v.x * v.x - v.y * v.y - self.magnet_length;
        let vy = 2.0 * v.x * v.y;
        self.strength * DVec2::new(vx, vy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_field() -> MagnetField {
        MagnetField::new(4096.0, 1e-4)
    }

    #[test]
    fn sample_matches_hand_computed_value() {
        // field((100, 0)) = 1e-4 * (100*100 - 0 - 4096, 0) = (0.5904, 0)
        let f = default_field();
        let v = f.sample(DVec2::new(100.0, 0.0));
        assert!((v.x - 0.5904).abs() < 1e-12, "Vx = {}", v.x);
        assert!(v.y.abs() < 1e-12, "Vy = {}", v.y);
    }

    #[test]
    fn sample_off_axis() {
        // field((3, 2)) with length 4 and strength 2:
        // Vx = 9 - 4 - 4 = 1, Vy = 12, scaled by 2 -> (2, 24)
        let f = MagnetField::new(4.0, 2.0);
        let v = f.sample(DVec2::new(3.0, 2.0));
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!((v.y - 24.0).abs() < 1e-12);
    }

    #[test]
    fn field_is_even_at_sample_points() {
        let f = default_field();
        for p in [
            DVec2::new(1.0, 2.0),
            DVec2::new(-3.5, 0.25),
            DVec2::new(64.0, -64.0),
            DVec2::new(0.0, 17.0),
        ] {
            assert_eq!(f.sample(p), f.sample(-p), "field not even at {p:?}");
        }
    }

    #[test]
    fn zero_vector_is_defined_and_finite() {
        let f = default_field();
        let v = f.sample(DVec2::ZERO);
        assert!(v.x.is_finite() && v.y.is_finite());
        // At the origin only the shift survives: strength * (-magnet_length, 0).
        assert!((v.x - (-0.4096)).abs() < 1e-12, "Vx = {}", v.x);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn zero_strength_yields_zero_field_everywhere() {
        let f = MagnetField::new(4096.0, 0.0);
        for p in [DVec2::ZERO, DVec2::new(100.0, -50.0), DVec2::new(-7.0, 3.0)] {
            assert_eq!(f.sample(p), DVec2::ZERO);
        }
    }

    #[test]
    fn vx_crosses_zero_near_sqrt_magnet_length() {
        let f = default_field();
        let r = 4096.0_f64.sqrt(); // 64
        assert!(f.sample(DVec2::new(r, 0.0)).x.abs() < 1e-9);
        assert!(f.sample(DVec2::new(r - 1.0, 0.0)).x < 0.0);
        assert!(f.sample(DVec2::new(r + 1.0, 0.0)).x > 0.0);
    }

    #[test]
    fn trait_is_object_safe() {
        let f = default_field();
        let dyn_ref: &dyn FieldFunction = &f;
        assert_eq!(dyn_ref.sample(DVec2::ZERO), f.sample(DVec2::ZERO));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f64> {
            -1e4_f64..1e4
        }

        proptest! {
            #[test]
            fn even_for_any_finite_input(x in coord(), y in coord()) {
                let f = default_field();
                let p = DVec2::new(x, y);
                // Exact by algebraic construction: both components only see
                // x*x, y*y, and x*y, all of which ignore a joint sign flip.
                prop_assert_eq!(f.sample(p), f.sample(-p));
            }

            #[test]
            fn total_over_finite_inputs(
                x in coord(),
                y in coord(),
                length in -1e6_f64..1e6,
                strength in -10.0_f64..10.0,
            ) {
                let f = MagnetField::new(length, strength);
                let v = f.sample(DVec2::new(x, y));
                prop_assert!(v.x.is_finite(), "Vx not finite: {}", v.x);
                prop_assert!(v.y.is_finite(), "Vy not finite: {}", v.y);
            }
        }
    }
}
