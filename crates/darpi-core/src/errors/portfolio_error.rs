//! Portfolio-level errors.

use super::error_code::{self, DarpiErrorCode};
use super::SimulationError;

/// Errors that can occur while building or running a risk portfolio.
/// A single failing risk fails the whole portfolio.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("Risk `{name}`: {source}")]
    Risk {
        name: String,
        #[source]
        source: SimulationError,
    },

    #[error("Risk `{name}` appears more than once in the portfolio")]
    DuplicateRisk { name: String },

    #[error("Portfolio contains no risks")]
    Empty,

    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] SimulationError),

    #[error("Portfolio {format} parse error: {message}")]
    Parse { format: &'static str, message: String },

    #[error("Cannot read portfolio file {path}: {message}")]
    Io { path: String, message: String },
}

impl PortfolioError {
    /// Attach a risk name to an engine error.
    pub fn for_risk(name: impl Into<String>, source: SimulationError) -> Self {
        Self::Risk {
            name: name.into(),
            source,
        }
    }
}

impl DarpiErrorCode for PortfolioError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Risk { source, .. } => source.error_code(),
            Self::DuplicateRisk { .. } => error_code::DUPLICATE_RISK,
            Self::Empty => error_code::EMPTY_PORTFOLIO,
            Self::Aggregation(e) => e.error_code(),
            Self::Parse { .. } => error_code::PORTFOLIO_PARSE_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
