//! The simulation parameter set.
//!
//! One [`SimParams`] describes a single shot: the capacitor bank, the series
//! resistance, the coil and slug geometry, and the sampled time span. The set
//! is validated once at construction and immutable afterwards, so the solver
//! never has to re-check mid-integration.

use crate::error::{CoilgunError, Result};
use crate::{IRON_DENSITY, MU_0};

/// Physical inputs for one simulation run.
///
/// Fields are private: a constructed `SimParams` is guaranteed valid for the
/// lifetime of the run. Use [`SimParams::new`] and the accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Initial capacitor voltage in volts
    init_volts: f64,
    /// Capacitance in farads
    capacitance: f64,
    /// Series circuit resistance in ohms
    resistance: f64,
    /// Coil winding count
    num_turns: u32,
    /// Coil cross-section diameter in meters
    coil_diameter: f64,
    /// Coil axial length in meters
    coil_length: f64,
    /// Slug diameter in meters
    slug_diameter: f64,
    /// Slug length in meters
    slug_length: f64,
    /// Total simulated time span in seconds
    duration_s: f64,
    /// Fixed sampling interval in seconds
    time_step: f64,
}

impl SimParams {
    /// Create a validated parameter set.
    ///
    /// Returns an error if any value is non-finite, if `capacitance`,
    /// `coil_length`, `duration_s` or `time_step` is not strictly positive,
    /// if `resistance` is negative, if the slug has no volume, or if the coil
    /// geometry yields a zero inductance (`num_turns == 0` or
    /// `coil_diameter <= 0`). Rejecting these up front keeps the circuit
    /// model free of division-by-zero conditions.
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
    ) -> Result<Self> {
        let finite = [
            ("init_volts", init_volts),
            ("capacitance", capacitance),
            ("resistance", resistance),
            ("coil_diameter", coil_diameter),
            ("coil_length", coil_length),
            ("slug_diameter", slug_diameter),
            ("slug_length", slug_length),
            ("duration_s", duration_s),
            ("time_step", time_step),
        ];
        for (param, value) in finite {
            if !value.is_finite() {
                return Err(CoilgunError::invalid_parameter(
                    param,
                    value,
                    "must be finite",
                ));
            }
        }

        let strictly_positive = [
            ("capacitance", capacitance),
            ("coil_diameter", coil_diameter),
            ("coil_length", coil_length),
            ("slug_diameter", slug_diameter),
            ("slug_length", slug_length),
            ("duration_s", duration_s),
            ("time_step", time_step),
        ];
        for (param, value) in strictly_positive {
            if value <= 0.0 {
                return Err(CoilgunError::invalid_parameter(
                    param,
                    value,
                    "must be strictly positive",
                ));
            }
        }

        if resistance < 0.0 {
            return Err(CoilgunError::invalid_parameter(
                "resistance",
                resistance,
                "must be non-negative",
            ));
        }

        if num_turns == 0 {
            return Err(CoilgunError::invalid_parameter(
                "num_turns",
                0.0,
                "coil must have at least one turn",
            ));
        }

        let params = Self {
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
        };

        let inductance = params.inductance();
        if !inductance.is_finite() || inductance <= 0.0 {
            return Err(CoilgunError::ZeroInductance { inductance });
        }

        Ok(params)
    }

    /// Initial capacitor voltage in volts.
    pub fn init_volts(&self) -> f64 {
        self.init_volts
    }

    /// Capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Series circuit resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Coil winding count.
    pub fn num_turns(&self) -> u32 {
        self.num_turns
    }

    /// Coil cross-section diameter in meters.
    pub fn coil_diameter(&self) -> f64 {
        self.coil_diameter
    }

    /// Coil axial length in meters.
    pub fn coil_length(&self) -> f64 {
        self.coil_length
    }

    /// Slug diameter in meters.
    pub fn slug_diameter(&self) -> f64 {
        self.slug_diameter
    }

    /// Slug length in meters.
    pub fn slug_length(&self) -> f64 {
        self.slug_length
    }

    /// Total simulated time span in seconds.
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Fixed sampling interval in seconds.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Coil cross-section area in m².
    pub fn coil_area(&self) -> f64 {
        let radius = self.coil_diameter / 2.0;
        std::f64::consts::PI * radius * radius
    }

    /// Coil inductance in henries, derived from geometry.
    ///
    /// `L = N² * mu_0 * A / l`. Recomputed on every call so that callers
    /// (the circuit model in particular) stay pure functions of their inputs.
    pub fn inductance(&self) -> f64 {
        let turns = self.num_turns as f64;
        (turns * turns * MU_0 * self.coil_area()) / self.coil_length
    }

    /// Winding density in turns per meter.
    pub fn turns_density(&self) -> f64 {
        self.num_turns as f64 / self.coil_length
    }

    /// Slug volume in m³.
    pub fn slug_volume(&self) -> f64 {
        let radius = self.slug_diameter / 2.0;
        std::f64::consts::PI * radius * radius * self.slug_length
    }

    /// Slug mass in kg, assuming solid iron.
    pub fn slug_mass(&self) -> f64 {
        IRON_DENSITY * self.slug_volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The demonstration shot: 100 V across 0.1 F through a 100-turn coil.
    fn demo_params() -> SimParams {
        SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6).unwrap()
    }

    #[test]
    fn test_valid_params_accepted() {
        let p = demo_params();
        assert_eq!(p.init_volts(), 100.0);
        assert_eq!(p.num_turns(), 100);
        assert_eq!(p.time_step(), 1e-6);
    }

    #[test]
    fn test_zero_capacitance_rejected() {
        let r = SimParams::new(100.0, 0.0, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(matches!(
            r,
            Err(CoilgunError::InvalidParameter { param: "capacitance", .. })
        ));
    }

    #[test]
    fn test_negative_coil_length_rejected() {
        let r = SimParams::new(100.0, 0.1, 3.0, 100, 0.01, -0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(matches!(
            r,
            Err(CoilgunError::InvalidParameter { param: "coil_length", .. })
        ));
    }

    #[test]
    fn test_zero_time_step_rejected() {
        let r = SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 0.0);
        assert!(r.is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let r = SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.0, 1e-6);
        assert!(r.is_err());
    }

    #[test]
    fn test_zero_turns_rejected() {
        let r = SimParams::new(100.0, 0.1, 3.0, 0, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(matches!(
            r,
            Err(CoilgunError::InvalidParameter { param: "num_turns", .. })
        ));
    }

    #[test]
    fn test_negative_resistance_rejected() {
        let r = SimParams::new(100.0, 0.1, -1.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(r.is_err());
    }

    #[test]
    fn test_non_finite_voltage_rejected() {
        let r = SimParams::new(f64::NAN, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(r.is_err());
    }

    #[test]
    fn test_zero_resistance_accepted() {
        // R = 0 is a legal undamped circuit
        let r = SimParams::new(100.0, 0.1, 0.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6);
        assert!(r.is_ok());
    }

    #[test]
    fn test_derived_inductance() {
        let p = demo_params();
        // L = N^2 * mu_0 * pi * (d/2)^2 / l
        //   = 1e4 * 4pi*1e-7 * pi * 2.5e-5 / 0.06 ~ 16.45 uH
        assert!((p.inductance() - 1.6449e-5).abs() < 1e-8);
    }

    #[test]
    fn test_derived_slug_mass() {
        let p = demo_params();
        // V = pi * (0.0025)^2 * 0.01 ~ 1.9635e-7 m^3, m = 7870 * V ~ 1.545 g
        assert!((p.slug_volume() - 1.9635e-7).abs() < 1e-10);
        assert!((p.slug_mass() - 1.5453e-3).abs() < 1e-6);
    }

    #[test]
    fn test_turns_density() {
        let p = demo_params();
        assert!((p.turns_density() - 100.0 / 0.06).abs() < 1e-9);
    }
}
