//! The simulation output bundle.

/// Names of the output series, in canonical column order.
pub const SERIES_NAMES: [&str; 9] = [
    "time",
    "voltage",
    "current",
    "mag_field",
    "force",
    "acceleration",
    "velocity_increment",
    "velocity",
    "position",
];

/// The complete result of one simulation run.
///
/// Nine equal-length series sharing one discrete time axis: index `i` in
/// every series refers to the instant `time[i]`. The bundle is produced once
/// by [`crate::solver::run_simulation`] and read-only afterwards.
///
/// Two velocity estimates are carried deliberately:
///
/// - [`velocity_increment`](Self::velocity_increment) is the magnetics pass's
///   per-interval trapezoid, the velocity gained over the last sampling
///   interval only
/// - [`velocity`](Self::velocity) is the cumulative trapezoidal integral of
///   acceleration over the whole axis
///
/// Neither supersedes the other; position integrates the increment series.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    /// Sample instants in seconds
    pub time: Vec<f64>,
    /// Capacitor voltage in volts
    pub voltage: Vec<f64>,
    /// Coil current in amperes
    pub current: Vec<f64>,
    /// Solenoid field in teslas
    pub mag_field: Vec<f64>,
    /// Pull force on the slug in newtons
    pub force: Vec<f64>,
    /// Slug acceleration in m/s²
    pub acceleration: Vec<f64>,
    /// Per-interval velocity increment in m/s
    pub velocity_increment: Vec<f64>,
    /// Cumulative velocity in m/s
    pub velocity: Vec<f64>,
    /// Slug position in meters
    pub position: Vec<f64>,
}

impl SimulationOutput {
    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the bundle holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Look up a series by name.
    ///
    /// This is the interface plotting and reporting collaborators consume:
    /// a read-only mapping from series name to an ordered numeric sequence.
    /// Valid names are listed in [`SERIES_NAMES`].
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        let series = match name {
            "time" => &self.time,
            "voltage" => &self.voltage,
            "current" => &self.current,
            "mag_field" => &self.mag_field,
            "force" => &self.force,
            "acceleration" => &self.acceleration,
            "velocity_increment" => &self.velocity_increment,
            "velocity" => &self.velocity,
            "position" => &self.position,
            _ => return None,
        };
        Some(series.as_slice())
    }

    /// Iterate over `(name, series)` pairs in canonical order.
    pub fn iter_series<'a>(&'a self) -> impl Iterator<Item = (&'static str, &'a [f64])> + 'a {
        SERIES_NAMES
            .iter()
            .map(|&name| (name, self.series(name).expect("canonical name")))
    }
}
