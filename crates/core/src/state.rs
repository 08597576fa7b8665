//! Integration state and its derivative.
//!
//! A [`State`] pairs the position and velocity of one particle, expressed
//! relative to the reference point. A [`Derivative`] is its instantaneous
//! rate of change. Both are ephemeral: a state is built at the start of a
//! particle's frame update, threaded through the integrator, and written
//! back; derivatives live entirely inside one integration step.

use crate::field::FieldFunction;
use glam::DVec2;

/// Position and velocity of one particle, relative to the reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: DVec2,
    pub velocity: DVec2,
}

/// Instantaneous rate of change of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    /// Rate of change of position (the state's velocity).
    pub d_position: DVec2,
    /// Rate of change of velocity (the field value at the state's position).
    pub d_velocity: DVec2,
}

impl State {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }

    /// Componentwise `self + derivative * h`.
    pub fn advanced(&self, d: &Derivative, h: f64) -> State {
        State {
            position: self.position + d.d_position * h,
            velocity: self.velocity + d.d_velocity * h,
        }
    }
}

/// Evaluates the derivative of `state` under `field`.
///
/// The field vector acts as an acceleration: position changes at the
/// current velocity, velocity changes at the field value. The particle has
/// inertia — the field perturbs its motion rather than prescribing it, so
/// trajectories can overshoot the reference point.
pub fn evaluate(field: &dyn FieldFunction, state: &State) -> Derivative {
    Derivative {
        d_position: state.velocity,
        d_velocity: field.sample(state.position),
    }
}
