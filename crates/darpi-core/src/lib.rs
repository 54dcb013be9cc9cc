//! # darpi-core
//!
//! Foundation crate for the darpi cost-risk engine.
//! Provides constants, the error taxonomy, layered configuration,
//! tracing setup, simulation event hooks, and the portfolio input types.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::DarpiConfig;
pub use errors::{ConfigError, DarpiErrorCode, PortfolioError, SimulationError};
pub use types::{CostTriple, Portfolio, Risk};
