//! Coilgun - Capacitor-Driven Coilgun Simulator
//!
//! Runs one deterministic simulation and streams the resulting time-series
//! bundle to stdout as CSV.
//!
//! # Usage
//!
//! ```bash
//! coilgun --init-volts 200 --num-turns 150 --duration-s 0.05 > shot.csv
//! ```

use clap::Parser;
use coilgun_core::{
    error::Result, export::write_csv_stdout, solver::run_simulation, SimParams,
    DEFAULT_TIME_STEP,
};

/// Capacitor-driven coilgun simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial capacitor voltage in volts
    #[arg(long, default_value_t = 100.0)]
    init_volts: f64,

    /// Capacitance in farads
    #[arg(long, default_value_t = 0.1)]
    capacitance: f64,

    /// Series circuit resistance in ohms
    #[arg(long, default_value_t = 3.0)]
    resistance: f64,

    /// Coil winding count
    #[arg(long, default_value_t = 100)]
    num_turns: u32,

    /// Coil cross-section diameter in meters
    #[arg(long, default_value_t = 0.01)]
    coil_diameter: f64,

    /// Coil axial length in meters
    #[arg(long, default_value_t = 0.06)]
    coil_length: f64,

    /// Slug diameter in meters
    #[arg(long, default_value_t = 0.005)]
    slug_diameter: f64,

    /// Slug length in meters
    #[arg(long, default_value_t = 0.01)]
    slug_length: f64,

    /// Total simulated time span in seconds
    #[arg(long, default_value_t = 0.2)]
    duration_s: f64,

    /// Sampling interval in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    time_step: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate the parameter set
    let params = SimParams::new(
        args.init_volts,
        args.capacitance,
        args.resistance,
        args.num_turns,
        args.coil_diameter,
        args.coil_length,
        args.slug_diameter,
        args.slug_length,
        args.duration_s,
        args.time_step,
    )?;

    // Run the simulation
    let output = run_simulation(&params)?;

    // Stream the bundle as CSV
    write_csv_stdout(&output)?;

    Ok(())
}
