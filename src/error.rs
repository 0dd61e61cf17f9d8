//! Error types for the coilgun simulator.
//!
//! This module provides a unified error type [`CoilgunError`] that covers
//! all error conditions that can occur during parameter validation and
//! simulation.

use thiserror::Error;

/// Result type alias using [`CoilgunError`].
pub type Result<T> = std::result::Result<T, CoilgunError>;

/// Unified error type for all coilgun operations.
#[derive(Error, Debug)]
pub enum CoilgunError {
    // ============ Parameter Validation Errors ============
    /// A physical parameter is outside its valid domain
    #[error("Invalid parameter '{param}' = {value}: {message}")]
    InvalidParameter {
        param: &'static str,
        value: f64,
        message: String,
    },

    /// The coil geometry yields a zero or non-finite inductance
    #[error("Coil geometry yields unusable inductance {inductance} H")]
    ZeroInductance { inductance: f64 },

    // ============ Simulation Errors ============
    /// The integrator produced a non-finite state value
    #[error("Numerical divergence at t = {time:.3e} s: {quantity} became non-finite")]
    NumericalDivergence { time: f64, quantity: &'static str },

    // ============ I/O Errors ============
    /// Error writing the output bundle
    #[cfg(feature = "cli")]
    #[error("Failed to write simulation output: {source}")]
    OutputWriteError {
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl CoilgunError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        param: &'static str,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            param,
            value,
            message: message.into(),
        }
    }

    /// Create a numerical divergence error
    pub fn divergence(time: f64, quantity: &'static str) -> Self {
        Self::NumericalDivergence { time, quantity }
    }
}
