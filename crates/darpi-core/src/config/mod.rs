//! Configuration system for darpi.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod darpi_config;
pub mod simulation_config;
pub mod statistics_config;

pub use darpi_config::{CliOverrides, DarpiConfig};
pub use simulation_config::SimulationConfig;
pub use statistics_config::StatisticsConfig;
