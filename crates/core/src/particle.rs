//! A point particle in absolute (screen-space) coordinates.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position and velocity of one particle in absolute coordinates.
///
/// Particles are created once at engine construction and mutated exactly
/// once per frame; the collection they live in never grows or shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Particle {
    /// Creates a particle at `position` with zero velocity.
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}
