//! The simulation driver.

use crate::circuit::{circuit_derivatives, CircuitState};
use crate::error::Result;
use crate::magnetics::derive_magnetics;
use crate::output::SimulationOutput;
use crate::params::SimParams;

use super::rk4;
use super::trapezoid::cumulative_trapezoid;

/// Build the fixed sampling axis for a run.
///
/// Equally spaced points `0, dt, 2dt, ...` covering the closed-open interval
/// `[0, duration_s)`: the number of samples is `ceil(duration_s / time_step)`
/// and `duration_s` itself is excluded. A duration shorter than one step
/// still yields the single sample `t = 0`.
pub fn time_axis(params: &SimParams) -> Vec<f64> {
    let n = (params.duration_s() / params.time_step()).ceil().max(1.0) as usize;
    (0..n).map(|k| k as f64 * params.time_step()).collect()
}

/// Run one complete simulation for a validated parameter set.
///
/// Orchestrates the full pipeline:
///
/// 1. Build the sampling axis ([`time_axis`])
/// 2. Integrate the circuit from `(init_volts, 0)` over the axis
/// 3. Derive field, force, acceleration and the per-interval velocity
///    increment from the current series
/// 4. Cumulatively integrate acceleration into [`velocity`] and the increment
///    series into [`position`], both starting at 0
///
/// The two integrations are independent: `velocity` re-derives the slug
/// speed from acceleration, while `position` integrates the magnetics pass's
/// own increment estimate. Both velocity series appear in the bundle.
///
/// The computation is deterministic: the same parameter set produces a
/// bit-identical bundle on every run.
///
/// [`velocity`]: SimulationOutput::velocity
/// [`position`]: SimulationOutput::position
pub fn run_simulation(params: &SimParams) -> Result<SimulationOutput> {
    let time = time_axis(params);

    let states = rk4::integrate(
        |t, y| circuit_derivatives(t, y, params),
        CircuitState::initial(params),
        &time,
    )?;
    let voltage: Vec<f64> = states.iter().map(|s| s.voltage).collect();
    let current: Vec<f64> = states.iter().map(|s| s.current).collect();

    let magnetics = derive_magnetics(&time, &current, params);

    let velocity = cumulative_trapezoid(&magnetics.acceleration, &time);
    let position = cumulative_trapezoid(&magnetics.velocity_increment, &time);

    Ok(SimulationOutput {
        time,
        voltage,
        current,
        mag_field: magnetics.mag_field,
        force: magnetics.force,
        acceleration: magnetics.acceleration,
        velocity_increment: magnetics.velocity_increment,
        velocity,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// The demonstration shot: 100 V across 0.1 F through a 100-turn coil.
    fn demo_params() -> SimParams {
        SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 0.2, 1e-6).unwrap()
    }

    /// Demo geometry with a shorter span, for tests that only need structure.
    fn short_params() -> SimParams {
        SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 1e-3, 1e-6).unwrap()
    }

    #[test]
    fn test_all_series_equal_length() {
        let output = run_simulation(&short_params()).unwrap();
        let n = output.time.len();
        assert!(n >= 1000);
        for (name, series) in output.iter_series() {
            assert_eq!(series.len(), n, "series '{name}' length mismatch");
        }
    }

    #[test]
    fn test_time_axis_shape() {
        let p = short_params();
        let time = time_axis(&p);

        assert_eq!(time[0], 0.0);
        assert!(*time.last().unwrap() < p.duration_s());
        for pair in time.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], p.time_step(), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_initial_sample() {
        let p = short_params();
        let output = run_simulation(&p).unwrap();

        assert_eq!(output.voltage[0], 100.0);
        assert_eq!(output.current[0], 0.0);
        assert_eq!(output.velocity_increment[0], 0.0);
        assert_eq!(output.velocity[0], 0.0);
        assert_eq!(output.position[0], 0.0);
    }

    #[test]
    fn test_idempotent_runs() {
        let p = short_params();
        let a = run_simulation(&p).unwrap();
        let b = run_simulation(&p).unwrap();
        // Deterministic batch computation: bit-identical output
        assert_eq!(a, b);
    }

    #[test]
    fn test_kinematics_are_the_stated_integrals() {
        let p = short_params();
        let output = run_simulation(&p).unwrap();

        let velocity = cumulative_trapezoid(&output.acceleration, &output.time);
        assert_eq!(output.velocity, velocity);

        // Position integrates the per-interval increment series, not the
        // cumulative velocity
        let position = cumulative_trapezoid(&output.velocity_increment, &output.time);
        assert_eq!(output.position, position);
    }

    #[test]
    fn test_undamped_loop_quarter_period() {
        // With R = 0 the loop rings at omega_0 = 1/sqrt(L*C): the capacitor
        // voltage V0*cos(omega_0*t) first crosses zero at T/4, where the
        // current magnitude peaks at V0*sqrt(C/L)
        let p = SimParams::new(100.0, 0.1, 0.0, 100, 0.01, 0.06, 0.005, 0.01, 5e-3, 1e-6).unwrap();
        let output = run_simulation(&p).unwrap();

        let omega0 = 1.0 / (p.inductance() * p.capacitance()).sqrt();
        let quarter_period = std::f64::consts::FRAC_PI_2 / omega0;

        let crossing = output
            .voltage
            .iter()
            .position(|&v| v <= 0.0)
            .expect("voltage should cross zero within the span");
        assert!((output.time[crossing] - quarter_period).abs() < 5e-6);

        let peak = output.current.iter().fold(0.0f64, |m, &i| m.max(i.abs()));
        let expected_peak = 100.0 * (p.capacitance() / p.inductance()).sqrt();
        assert_relative_eq!(peak, expected_peak, max_relative = 1e-5);
    }

    #[test]
    fn test_overdamped_demo_scenario() {
        // The demonstration shot is heavily overdamped (R = 3 ohm against a
        // critical resistance of ~26 milliohm): the discharge must complete
        // without oscillation and without numerical failure
        let p = demo_params();
        let output = run_simulation(&p).unwrap();

        assert_eq!(output.len(), time_axis(&p).len());
        assert!(output.len() >= 200_000);

        // Current flows out of the capacitor and never reverses
        assert_eq!(output.current[0], 0.0);
        assert!(output.current.iter().skip(1).all(|&i| i < 0.0));

        // Lossless energy bound on the peak current
        let peak = output.current.iter().fold(0.0f64, |m, &i| m.max(i.abs()));
        let lossless_peak = 100.0 * (p.capacitance() / p.inductance()).sqrt();
        assert!(peak < lossless_peak);

        // The slug only ever moves forward
        assert!(output.position.iter().all(|&x| x >= 0.0));
        assert!(*output.velocity.last().unwrap() > 0.0);
    }

    #[test]
    fn test_doubling_voltage_scales_current_and_force() {
        let base = short_params();
        let doubled =
            SimParams::new(200.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 1e-3, 1e-6).unwrap();

        let a = run_simulation(&base).unwrap();
        let b = run_simulation(&doubled).unwrap();

        let peak = |s: &[f64]| s.iter().fold(0.0f64, |m, &x| m.max(x.abs()));

        // Linear circuit: current doubles. Quadratic force law: force
        // quadruples.
        let (ia, ib) = (peak(&a.current), peak(&b.current));
        assert!(ib > ia);
        assert_relative_eq!(ib, 2.0 * ia, max_relative = 1e-9);

        let (fa, fb) = (peak(&a.force), peak(&b.force));
        assert!(fb > fa);
        assert_relative_eq!(fb, 4.0 * fa, max_relative = 1e-9);
    }

    #[test]
    fn test_degenerate_single_step_span() {
        // duration_s == time_step: a single-sample bundle, not an error
        let p = SimParams::new(100.0, 0.1, 3.0, 100, 0.01, 0.06, 0.005, 0.01, 1e-6, 1e-6).unwrap();
        let output = run_simulation(&p).unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(output.time, vec![0.0]);
        assert_eq!(output.voltage, vec![100.0]);
        assert_eq!(output.current, vec![0.0]);
        assert_eq!(output.velocity, vec![0.0]);
        assert_eq!(output.position, vec![0.0]);
    }
}
