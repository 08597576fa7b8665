//! Classic fourth-order Runge-Kutta integration of a [`State`].

use crate::field::FieldFunction;
use crate::state::{evaluate, State};

/// Advances `state` by one step of size `h` under `field`.
///
/// Four derivative evaluations, combined with the classic weights:
///
/// ```text
/// k1 = f(state)
/// k2 = f(state + k1 * h/2)
/// k3 = f(state + k2 * h/2)
/// k4 = f(state + k3 * h)
/// state' = state + (k1 + 2k2 + 2k3 + k4) * h/6
/// ```
///
/// Exact for fields at most linear in position and velocity within the
/// step — a zero field reduces to straight-line motion — with local
/// truncation error O(h^5) for smooth fields. `h = 0` returns `state`
/// unchanged: every derivative term is multiplied by zero.
pub fn integrate_step(field: &dyn FieldFunction, state: State, h: f64) -> State {
    let k1 = evaluate(field, &state);
    let k2 = evaluate(field, &state.advanced(&k1, h * 0.5));
    let k3 = evaluate(field, &state.advanced(&k2, h * 0.5));
    let k4 = evaluate(field, &state.advanced(&k3, h));

    let sixth = h / 6.0;
    State {
        position: state.position
            + (k1.d_position + 2.0 * (k2.d_position + k3.d_position) + k4.d_position) * sixth,
        velocity: state.velocity
            + (k1.d_velocity + 2.0 * (k2.d_velocity + k3.d_velocity) + k4.d_velocity) * sixth,
    }
}
