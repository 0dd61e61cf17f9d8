//! Capacitor/coil discharge dynamics.
//!
//! This module provides the continuous-time model of the drive circuit: a
//! charged capacitor discharging through the series resistance and the coil,
//! whose inductance is derived from winding geometry. The model is the
//! right-hand side of the initial-value problem solved by [`crate::solver`].

mod model;

pub use model::{circuit_derivatives, CircuitState};
