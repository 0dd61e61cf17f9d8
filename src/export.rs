//! CSV output for the CLI frontend.
//!
//! Serializes a [`SimulationOutput`] bundle as CSV, one row per sample, for
//! downstream plotting and reporting tools.

use std::io::{self, Write};

use crate::error::{CoilgunError, Result};
use crate::output::SimulationOutput;

/// Write a bundle as CSV: a header of series names, then one row per sample.
///
/// Values are written in scientific notation so microsecond time stamps and
/// kiloampere currents survive round-tripping through text.
pub fn write_csv<W: Write>(output: &SimulationOutput, writer: &mut W) -> Result<()> {
    let mut write = |line: &str| {
        writer
            .write_all(line.as_bytes())
            .map_err(|source| CoilgunError::OutputWriteError { source })
    };

    let names: Vec<&str> = output.iter_series().map(|(name, _)| name).collect();
    write(&names.join(","))?;
    write("\n")?;

    let columns: Vec<&[f64]> = output.iter_series().map(|(_, series)| series).collect();
    let mut row = String::new();
    for i in 0..output.len() {
        row.clear();
        for (col, series) in columns.iter().enumerate() {
            if col > 0 {
                row.push(',');
            }
            row.push_str(&format!("{:.9e}", series[i]));
        }
        row.push('\n');
        write(&row)?;
    }

    Ok(())
}

/// Stream a bundle to stdout as CSV.
pub fn write_csv_stdout(output: &SimulationOutput) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    write_csv(output, &mut handle)?;
    handle
        .flush()
        .map_err(|source| CoilgunError::OutputWriteError { source })
}
