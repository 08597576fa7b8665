#![deny(unsafe_code)]
//! Magnet-field particle system.
//!
//! Particles drift through the quadratic "magnet" field anchored to a
//! per-frame reference point. Each frame, every particle is converted into
//! a field-relative state, advanced by a fixed number of RK4 sub-steps,
//! written back to screen space, and speed-clamped. The field acts as an
//! acceleration, so particles carry inertia and can overshoot the
//! reference point.
//!
//! Sub-stepping exists for stability: the field magnitude grows
//! quadratically with distance and RK4's stability region is finite, so
//! one large step near strong-field regions can diverge or oscillate.
//! Higher sub-step counts are needed as `strength` or the frame delta
//! grow.

use flowfield_core::error::EngineError;
use flowfield_core::field::{FieldFunction, MagnetField};
use flowfield_core::integrator::integrate_step;
use flowfield_core::params::{param_f64, param_usize};
use flowfield_core::particle::Particle;
use flowfield_core::prng::Xorshift64;
use flowfield_core::state::State;
use flowfield_core::Engine;
use glam::DVec2;
use serde_json::{json, Value};

/// Default shift constant of the field polynomial.
const DEFAULT_MAGNET_LENGTH: f64 = 4096.0;
/// Default uniform field scale.
const DEFAULT_STRENGTH: f64 = 1e-4;
/// Default speed ceiling, in display units per second.
const DEFAULT_MAX_SPEED: f64 = 600.0;
/// Default RK4 sub-steps per frame.
const DEFAULT_SUBSTEPS: usize = 16;
/// Default particle count.
const DEFAULT_PARTICLE_COUNT: usize = 1000;

/// Longest frame delta accepted by [`MagnetFlow::step`]. Larger gaps
/// (e.g. after an external pause/resume) are clamped so a single frame
/// cannot push the integrator out of its stability region.
pub const MAX_DELTA_TIME: f64 = 0.25;

/// Simulation parameters for the magnet engine.
///
/// Process-wide constants, fixed for a run and injected at construction —
/// nothing ambient is read during a step. Use [`Default`] for the
/// classic tuning (length 4096, strength 1e-4, 16 sub-steps).
#[derive(Debug, Clone, Copy)]
pub struct MagnetParams {
    /// Shift constant of the field polynomial.
    pub magnet_length: f64,
    /// Uniform field scale.
    pub strength: f64,
    /// Per-particle speed ceiling after each frame.
    pub max_speed: f64,
    /// RK4 sub-steps per frame.
    pub substeps: usize,
    /// Number of particles seeded at construction.
    pub particle_count: usize,
}

impl Default for MagnetParams {
    fn default() -> Self {
        Self {
            magnet_length: DEFAULT_MAGNET_LENGTH,
            strength: DEFAULT_STRENGTH,
            max_speed: DEFAULT_MAX_SPEED,
            substeps: DEFAULT_SUBSTEPS,
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl MagnetParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            magnet_length: param_f64(params, "magnet_length", DEFAULT_MAGNET_LENGTH),
            strength: param_f64(params, "strength", DEFAULT_STRENGTH),
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED),
            substeps: param_usize(params, "substeps", DEFAULT_SUBSTEPS),
            particle_count: param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT),
        }
    }

    /// Rejects non-finite floats, a non-positive `max_speed`, and a zero
    /// sub-step count. Called once at construction; the per-frame loop
    /// assumes validated parameters.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [
            ("magnet_length", self.magnet_length),
            ("strength", self.strength),
            ("max_speed", self.max_speed),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteParameter { name, value });
            }
        }
        if self.max_speed <= 0.0 {
            return Err(EngineError::NonPositiveParameter {
                name: "max_speed",
                value: self.max_speed,
            });
        }
        if self.substeps == 0 {
            return Err(EngineError::InvalidSubsteps(0));
        }
        Ok(())
    }
}

/// Magnet-field particle engine.
///
/// Owns a fixed-size particle collection seeded uniformly inside the
/// display bounds. Each [`step`](Engine::step) advances every particle
/// independently; there is no cross-particle interaction and no state
/// beyond the particles themselves.
pub struct MagnetFlow {
    width: f64,
    height: f64,
    field: MagnetField,
    particles: Vec<Particle>,
    params: MagnetParams,
}

impl MagnetFlow {
    /// Creates an engine with `params.particle_count` particles placed
    /// uniformly inside `width x height` (positions determined by `seed`),
    /// all at rest.
    ///
    /// Returns `EngineError::InvalidDimensions` for zero bounds; parameter
    /// contract violations are rejected here, never in the frame loop.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: MagnetParams,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        params.validate()?;
        let (w, h) = (width as f64, height as f64);
        let mut rng = Xorshift64::new(seed);
        let particles = seed_particles(&mut rng, w, h, params.particle_count);
        Ok(Self {
            width: w,
            height: h,
            field: MagnetField::new(params.magnet_length, params.strength),
            particles,
            params,
        })
    }

    /// Creates an engine from a JSON params object (missing keys fall back
    /// to defaults).
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, MagnetParams::from_json(json_params))
    }

    /// Current speed ceiling.
    pub fn max_speed(&self) -> f64 {
        self.params.max_speed
    }

    /// RK4 sub-steps applied per frame.
    pub fn substeps(&self) -> usize {
        self.params.substeps
    }
}

impl Engine for MagnetFlow {
    fn step(&mut self, reference: DVec2, delta_time: f64) -> Result<(), EngineError> {
        let dt = clamp_delta_time(delta_time);
        let sub_dt = dt / self.params.substeps as f64;
        for particle in &mut self.particles {
            // The field lives in reference-relative coordinates; convert,
            // sub-step, convert back.
            let mut state = State::new(particle.position - reference, particle.velocity);
            for _ in 0..self.params.substeps {
                state = integrate_step(&self.field, state, sub_dt);
            }
            particle.position = state.position + reference;
            particle.velocity = state.velocity.clamp_length_max(self.params.max_speed);
        }
        Ok(())
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn field(&self) -> &dyn FieldFunction {
        &self.field
    }

    fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn params(&self) -> Value {
        json!({
            "magnet_length": self.params.magnet_length,
            "strength": self.params.strength,
            "max_speed": self.params.max_speed,
            "substeps": self.params.substeps,
            "particle_count": self.params.particle_count,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "magnet_length": {
                "type": "number",
                "default": DEFAULT_MAGNET_LENGTH,
                "min": 0.0,
                "max": 1.0e6,
                "description": "Shift constant of the field polynomial"
            },
            "strength": {
                "type": "number",
                "default": DEFAULT_STRENGTH,
                "min": 0.0,
                "max": 1.0,
                "description": "Uniform field scale (acceleration per unit)"
            },
            "max_speed": {
                "type": "number",
                "default": DEFAULT_MAX_SPEED,
                "min": 1.0,
                "max": 1.0e4,
                "description": "Per-particle speed ceiling after each frame"
            },
            "substeps": {
                "type": "integer",
                "default": DEFAULT_SUBSTEPS,
                "min": 1,
                "max": 64,
                "description": "RK4 sub-steps per frame"
            },
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 0,
                "max": 100000,
                "description": "Number of particles seeded at construction"
            }
        })
    }
}

/// Boundary policy for the frame delta: NaN, infinite, and negative values
/// become 0 (time never moves backward); longer gaps are capped at
/// [`MAX_DELTA_TIME`]. Applied here, never inside the pure integrator.
fn clamp_delta_time(delta_time: f64) -> f64 {
    if !delta_time.is_finite() || delta_time < 0.0 {
        0.0
    } else {
        delta_time.min(MAX_DELTA_TIME)
    }
}

/// Places `count` particles uniformly inside the bounds, at rest.
fn seed_particles(rng: &mut Xorshift64, width: f64, height: f64, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let x = rng.next_range(0.0, width);
            let y = rng.next_range(0.0, height);
            Particle::at_rest(DVec2::new(x, y))
        })
        .collect()
}
