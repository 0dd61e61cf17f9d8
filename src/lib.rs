//! # Coilgun Core
//!
//! A deterministic electromechanical simulator for capacitor-driven coilguns.
//!
//! This library provides:
//! - A validated, immutable parameter set describing one shot (capacitor bank,
//!   coil geometry, projectile geometry, time span)
//! - An RLC discharge model whose inductance is derived from coil geometry
//! - A magnetics pass converting coil current into field, force and acceleration
//!   on the ferromagnetic slug
//! - A fixed-axis integration driver producing the full kinematic time-series
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`params`] - The simulation parameter set and its validation
//! - [`circuit`] - The capacitor/coil discharge dynamics (ODE right-hand side)
//! - [`magnetics`] - Per-sample field, force and acceleration derivation
//! - [`solver`] - Fixed-step integration and the simulation driver
//! - [`output`] - The strongly-typed time-series bundle
//! - [`export`] - CSV serialization of a bundle (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! coilgun --init-volts 200 --num-turns 150 > shot.csv
//! ```
//!
//! ### Library
//!
//! ```no_run
//! use coilgun_core::{run_simulation, SimParams};
//!
//! let params = SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6)?;
//! let output = run_simulation(&params)?;
//! println!("muzzle velocity: {} m/s", output.velocity.last().unwrap());
//! # Ok::<(), coilgun_core::CoilgunError>(())
//! ```
//!
//! ## Simulation Method
//!
//! One run is a single deterministic batch computation:
//!
//! 1. Build the fixed sampling axis `0, dt, 2dt, ...` over `[0, duration_s)`
//! 2. Integrate the circuit ODE `dV/dt = I/C`, `dI/dt = -(R*I + V)/L` from
//!    `(init_volts, 0)` with classic RK4, reporting the state at the axis points
//! 3. Derive magnetic field, force and acceleration from the current series
//! 4. Cumulatively integrate acceleration into velocity and the per-interval
//!    velocity estimate into position (trapezoidal rule)
//!
//! The circuit model is a pure function of its inputs, so independent runs
//! (e.g. a parameter sweep driven by a UI) may execute in parallel with no
//! shared state.

pub mod circuit;
pub mod error;
pub mod magnetics;
pub mod output;
pub mod params;
pub mod solver;

#[cfg(feature = "cli")]
pub mod export;

// Re-export main types for convenience
pub use error::{CoilgunError, Result};
pub use output::SimulationOutput;
pub use params::SimParams;
pub use solver::run_simulation;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCoilgunSim;

/// Permeability of free space in T·m/A
pub const MU_0: f64 = 4.0 * std::f64::consts::PI * 1e-7;

/// Density of iron in kg/m³
pub const IRON_DENSITY: f64 = 7870.0;

/// Relative permeability of the iron slug (linear approximation, no saturation)
pub const CHI_IRON: f64 = 1000.0;

/// Default sampling interval in seconds
pub const DEFAULT_TIME_STEP: f64 = 1e-6;
