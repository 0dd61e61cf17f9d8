//! The RLC discharge model.

use std::ops::{Add, Mul};

use crate::params::SimParams;

/// Instantaneous circuit state: capacitor voltage and coil current.
///
/// This is the state vector evolved by the solver. It exists only inside the
/// integration loop; callers see the sampled [`crate::output::SimulationOutput`]
/// series instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitState {
    /// Capacitor voltage in volts
    pub voltage: f64,
    /// Coil current in amperes
    pub current: f64,
}

impl CircuitState {
    /// Initial state for a bank charged to `init_volts` with no coil current.
    pub fn initial(params: &SimParams) -> Self {
        Self {
            voltage: params.init_volts(),
            current: 0.0,
        }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.voltage.is_finite() && self.current.is_finite()
    }
}

// Vector-space operations so Runge-Kutta stage arithmetic reads naturally.

impl Add for CircuitState {
    type Output = CircuitState;

    fn add(self, rhs: CircuitState) -> CircuitState {
        CircuitState {
            voltage: self.voltage + rhs.voltage,
            current: self.current + rhs.current,
        }
    }
}

impl Mul<f64> for CircuitState {
    type Output = CircuitState;

    fn mul(self, rhs: f64) -> CircuitState {
        CircuitState {
            voltage: self.voltage * rhs,
            current: self.current * rhs,
        }
    }
}

/// Time derivative of the circuit state.
///
/// Series RLC loop with the sign convention that current flows out of the
/// capacitor:
///
/// - `dV/dt = I / C`
/// - `dI/dt = -(R*I + V) / L`
///
/// The inductance `L` is recomputed from coil geometry on every call
/// ([`SimParams::inductance`]), which keeps this a pure function of its
/// inputs: no caching, no shared state, safe to call concurrently for any
/// number of states. A validated [`SimParams`] guarantees `C > 0` and
/// `L > 0`, so no division here can blow up.
pub fn circuit_derivatives(_t: f64, state: CircuitState, params: &SimParams) -> CircuitState {
    let d_voltage = state.current / params.capacitance();

    let inductance = params.inductance();
    let d_current = -(params.resistance() * state.current + state.voltage) / inductance;

    CircuitState {
        voltage: d_voltage,
        current: d_current,
    }
}
