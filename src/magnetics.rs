//! Per-sample field, force and acceleration on the slug.
//!
//! Converts a sampled coil-current series into the magnetic field inside the
//! solenoid, the pull force on the iron slug, the resulting acceleration, and
//! a per-interval trapezoidal velocity increment. The slug is treated as
//! linearly permeable iron; saturation is not modeled.

use crate::params::SimParams;
use crate::{CHI_IRON, MU_0};

/// Output of the magnetics pass: four series aligned with the input time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticsSeries {
    /// Solenoid field in teslas
    pub mag_field: Vec<f64>,
    /// Pull force on the slug in newtons
    pub force: Vec<f64>,
    /// Slug acceleration in m/s²
    pub acceleration: Vec<f64>,
    /// Velocity gained over the last sampling interval in m/s.
    ///
    /// This is the single-interval trapezoid `(dt/2) * (a[i-1] + a[i])`, not a
    /// running sum; the cumulative velocity lives in
    /// [`crate::output::SimulationOutput::velocity`]. Both estimates are kept.
    pub velocity_increment: Vec<f64>,
}

impl MagneticsSeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            mag_field: Vec::with_capacity(n),
            force: Vec::with_capacity(n),
            acceleration: Vec::with_capacity(n),
            velocity_increment: Vec::with_capacity(n),
        }
    }

    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.mag_field.len()
    }

    /// Whether the series are empty.
    pub fn is_empty(&self) -> bool {
        self.mag_field.is_empty()
    }
}

/// Derive field, force, acceleration and the velocity increment from a
/// `(time, current)` series.
///
/// Per sample:
/// - `B = mu_0 * (N / l) * I`
/// - `F = chi * B^2 * V_slug / (2 * mu_0 * (1 + chi)^2)`
/// - `a = F / m_slug`
/// - `dv[0] = 0`, `dv[i] = (t[i] - t[i-1]) / 2 * (a[i-1] + a[i])`
///
/// The velocity increment couples each sample to its predecessor, so this
/// pass is an ordered fold over the time axis (the accumulator carries the
/// previous sample's time and acceleration) and must not be parallelized.
///
/// `time` and `current` must be equal-length; the driver guarantees this.
// TODO: zero the field once the slug passes the coil midpoint. Needs slug
// position fed back into this pass, which today runs before integration.
pub fn derive_magnetics(time: &[f64], current: &[f64], params: &SimParams) -> MagneticsSeries {
    debug_assert_eq!(time.len(), current.len());

    let turns_density = params.turns_density();
    let slug_volume = params.slug_volume();
    let slug_mass = params.slug_mass();
    let force_factor =
        (CHI_IRON * slug_volume) / (2.0 * MU_0 * (1.0 + CHI_IRON) * (1.0 + CHI_IRON));

    let samples = time
        .iter()
        .zip(current)
        .scan(None::<(f64, f64)>, |prev, (&t, &i)| {
            let b = MU_0 * turns_density * i;
            let f = force_factor * b * b;
            let a = f / slug_mass;
            let dv = match *prev {
                None => 0.0,
                Some((prev_t, prev_a)) => (t - prev_t) / 2.0 * (prev_a + a),
            };
            *prev = Some((t, a));
            Some((b, f, a, dv))
        });

    let mut series = MagneticsSeries::with_capacity(time.len());
    for (b, f, a, dv) in samples {
        series.mag_field.push(b);
        series.force.push(f);
        series.acceleration.push(a);
        series.velocity_increment.push(dv);
    }
    series
}
