//! Errors raised by the sampling and statistics engine.
//!
//! Every public engine operation validates its arguments up front and
//! fails with one of these; there are no partial results.

use super::error_code::{self, DarpiErrorCode};

/// Errors from distribution construction, sampling, aggregation, and
/// empirical statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A numeric argument is not a usable number (NaN, infinite, or a
    /// non-numeric value in document input).
    #[error("Parameter `{parameter}` must be a finite number, got {value}")]
    InvalidParameterType { parameter: String, value: String },

    /// A numeric argument lies outside its permitted bounds.
    #[error("Value {value} is out of range for `{parameter}`. It must be between {lower} and {upper}.")]
    InvalidParameterRange {
        parameter: String,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Sample vectors handed to the aggregator have inconsistent lengths.
    #[error("Not all sample vectors have the same length (sample {index} has {actual} entries, the first has {expected})")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Exact-match percentile lookup missed the 101-point grid.
    #[error("Percentile {p} is not on the 0.00..=1.00 grid with step 0.01")]
    PercentileNotFound { p: f64 },

    /// An operation received no data to work on.
    #[error("Cannot compute {what} from empty input")]
    EmptyInput { what: &'static str },
}

impl SimulationError {
    /// Build an `InvalidParameterType` error for a non-finite float.
    pub fn not_finite(parameter: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameterType {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Build an `InvalidParameterRange` error.
    pub fn out_of_range(parameter: impl Into<String>, value: f64, lower: f64, upper: f64) -> Self {
        Self::InvalidParameterRange {
            parameter: parameter.into(),
            value,
            lower,
            upper,
        }
    }
}

impl DarpiErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameterType { .. } => error_code::INVALID_PARAMETER_TYPE,
            Self::InvalidParameterRange { .. } => error_code::INVALID_PARAMETER_RANGE,
            Self::LengthMismatch { .. } => error_code::LENGTH_MISMATCH,
            Self::PercentileNotFound { .. } => error_code::PERCENTILE_NOT_FOUND,
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
        }
    }
}
