//! Fixed-axis numerical integration.
//!
//! This module provides the numerical engine for a simulation run.
//!
//! ## Contract
//!
//! The externally visible surface is the fixed sampling axis: equally spaced
//! points `0, dt, 2dt, ...` over the closed-open interval `[0, duration_s)`.
//! The integrator advances the circuit state from axis point to axis point
//! and reports the state at exactly those points; downstream cumulative
//! integrals are taken over the same axis, so every output series shares it
//! sample-for-sample.
//!
//! The driver runs the four stages of a simulation in order:
//!
//! 1. Build the sampling axis
//! 2. Solve the circuit initial-value problem with classic RK4 ([`integrate`])
//! 3. Derive magnetics from the current series ([`crate::magnetics`])
//! 4. Cumulatively integrate acceleration into velocity, and the velocity
//!    increment into position (trapezoidal rule)

mod driver;
mod rk4;
mod trapezoid;

pub use driver::{run_simulation, time_axis};
pub use rk4::integrate;
pub use trapezoid::cumulative_trapezoid;
