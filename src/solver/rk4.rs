//! Classic 4th-order Runge-Kutta integration over a fixed sample axis.

use crate::circuit::CircuitState;
use crate::error::{CoilgunError, Result};

/// Integrate an initial-value problem, reporting the state at every point of
/// `times`.
///
/// `f(t, y)` is the right-hand side; `times` must be increasing. The first
/// entry of the returned vector is `y0` itself (the axis starts at the
/// initial instant). Each interval is advanced with one classic fourth-order
/// RK4 step with no internal adaptivity: the sample axis is both the
/// reporting grid and the integration grid.
///
/// A state that turns non-finite (stiff or divergent parameter combination)
/// aborts the run with [`CoilgunError::NumericalDivergence`] naming the
/// instant of failure, rather than returning NaN-filled series.
pub fn integrate<F>(f: F, y0: CircuitState, times: &[f64]) -> Result<Vec<CircuitState>>
where
    F: Fn(f64, CircuitState) -> CircuitState,
{
    let mut states = Vec::with_capacity(times.len());
    if times.is_empty() {
        return Ok(states);
    }

    let mut y = y0;
    states.push(y);

    for pair in times.windows(2) {
        let (t, t_next) = (pair[0], pair[1]);
        let dt = t_next - t;

        let k1 = f(t, y);
        let k2 = f(t + dt / 2.0, y + k1 * (dt / 2.0));
        let k3 = f(t + dt / 2.0, y + k2 * (dt / 2.0));
        let k4 = f(t + dt, y + k3 * dt);

        y = y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);

        if !y.is_finite() {
            let quantity = if y.voltage.is_finite() {
                "current"
            } else {
                "voltage"
            };
            return Err(CoilgunError::divergence(t_next, quantity));
        }

        states.push(y);
    }

    Ok(states)
}
