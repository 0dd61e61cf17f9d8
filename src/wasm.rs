//! WASM bindings for Coilgun Core.
//!
//! This module provides JavaScript-friendly bindings for browser UIs that
//! drive parameter sweeps (e.g. slider panels re-running the simulation on
//! every change). Each run is independent, so a worker pool may execute
//! several sweeps concurrently.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCoilgunSim } from 'coilgun_core';
//!
//! await init();
//!
//! const sim = new WasmCoilgunSim(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
//! sim.run();
//!
//! plot(sim.series('time'), sim.series('velocity'));
//! ```

use wasm_bindgen::prelude::*;

use crate::output::{SimulationOutput, SERIES_NAMES};
use crate::params::SimParams;
use crate::solver::run_simulation;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible coilgun simulator.
///
/// Wraps a validated parameter set and, after [`run`](Self::run), the output
/// bundle, exposing each series as a `Float64Array`.
#[wasm_bindgen]
pub struct WasmCoilgunSim {
    params: SimParams,
    output: Option<SimulationOutput>,
}

#[wasm_bindgen]
impl WasmCoilgunSim {
    /// Create a simulator from the ten physical parameters.
    ///
    /// # Arguments
    /// * `init_volts` - Initial capacitor voltage in volts
    /// * `capacitance` - Capacitance in farads
    /// * `resistance` - Series resistance in ohms
    /// * `num_turns` - Coil winding count
    /// * `coil_diameter` - Coil cross-section diameter in meters
    /// * `coil_length` - Coil axial length in meters
    /// * `slug_diameter` - Slug diameter in meters
    /// * `slug_length` - Slug length in meters
    /// * `duration_s` - Simulated time span in seconds
    /// * `time_step` - Sampling interval in seconds
    ///
    /// # Returns
    /// A new `WasmCoilgunSim` or an error if the parameter set is invalid.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        init_volts: f64,
        capacitance: f64,
        resistance: f64,
        num_turns: u32,
        coil_diameter: f64,
        coil_length: f64,
        slug_diameter: f64,
        slug_length: f64,
        duration_s: f64,
        time_step: f64,
    ) -> Result<WasmCoilgunSim, JsValue> {
        let params = SimParams::new(
            init_volts,
            capacitance,
            resistance,
            num_turns,
            coil_diameter,
            coil_length,
            slug_diameter,
            slug_length,
            duration_s,
            time_step,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmCoilgunSim {
            params,
            output: None,
        })
    }

    /// Execute the simulation.
    ///
    /// Deterministic: re-running replaces the bundle with identical values.
    #[wasm_bindgen]
    pub fn run(&mut self) -> Result<(), JsValue> {
        let output =
            run_simulation(&self.params).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.output = Some(output);
        Ok(())
    }

    /// Get an output series by name as a `Float64Array`.
    ///
    /// Valid names are listed by [`series_names`]. Returns `undefined` until
    /// [`run`](Self::run) has been called, or for an unknown name.
    #[wasm_bindgen]
    pub fn series(&self, name: &str) -> Option<Vec<f64>> {
        self.output
            .as_ref()
            .and_then(|o| o.series(name))
            .map(|s| s.to_vec())
    }

    /// Number of samples in the output bundle (0 before [`run`](Self::run)).
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.output.as_ref().map_or(0, |o| o.len())
    }

    /// Final slug velocity in m/s (cumulative estimate), if available.
    #[wasm_bindgen(getter)]
    pub fn muzzle_velocity(&self) -> Option<f64> {
        self.output
            .as_ref()
            .and_then(|o| o.velocity.last().copied())
    }
}

/// Names of the output series.
#[wasm_bindgen]
pub fn series_names() -> Vec<JsValue> {
    SERIES_NAMES.iter().map(|&n| JsValue::from_str(n)).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default sampling interval.
#[wasm_bindgen]
pub fn default_time_step() -> f64 {
    crate::DEFAULT_TIME_STEP
}
