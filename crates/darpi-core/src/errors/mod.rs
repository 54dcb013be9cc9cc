//! Error handling for darpi.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod portfolio_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::DarpiErrorCode;
pub use portfolio_error::PortfolioError;
pub use simulation_error::SimulationError;
