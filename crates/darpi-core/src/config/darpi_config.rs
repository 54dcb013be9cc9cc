//! Top-level darpi configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{SimulationConfig, StatisticsConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DARPI_*`)
/// 3. Project config (`darpi.toml` in project root)
/// 4. User config (`~/.darpi/config.toml`)
/// 5. Compiled defaults
///
/// Resolved once at startup and handed to the simulator by value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DarpiConfig {
    pub simulation: SimulationConfig,
    pub statistics: StatisticsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub histogram_bins: Option<usize>,
}

impl DarpiConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::parse("<string>", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DarpiConfig) -> Result<(), ConfigError> {
        if config.simulation.iterations == Some(0) {
            return Err(ConfigError::invalid("simulation.iterations", "must be greater than 0"));
        }
        if config.statistics.histogram_bins == Some(0) {
            return Err(ConfigError::invalid("statistics.histogram_bins", "must be greater than 0"));
        }
        if let Some(top) = config.statistics.top_probability {
            if !(top > 0.0 && top <= 1.0) {
                return Err(ConfigError::invalid(
                    "statistics.top_probability",
                    "must be in (0.0, 1.0]",
                ));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.darpi/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".darpi").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DarpiConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: DarpiConfig =
            toml::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut DarpiConfig, other: &DarpiConfig) {
        if other.simulation.iterations.is_some() {
            base.simulation.iterations = other.simulation.iterations;
        }
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.statistics.histogram_bins.is_some() {
            base.statistics.histogram_bins = other.statistics.histogram_bins;
        }
        if other.statistics.top_probability.is_some() {
            base.statistics.top_probability = other.statistics.top_probability;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DARPI_SIMULATION_ITERATIONS`, `DARPI_STATISTICS_HISTOGRAM_BINS`, etc.
    fn apply_env_overrides(config: &mut DarpiConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<usize>("DARPI_SIMULATION_ITERATIONS")? {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = env_value::<u64>("DARPI_SIMULATION_SEED")? {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_value::<usize>("DARPI_STATISTICS_HISTOGRAM_BINS")? {
            config.statistics.histogram_bins = Some(v);
        }
        if let Some(v) = env_value::<f64>("DARPI_STATISTICS_TOP_PROBABILITY")? {
            config.statistics.top_probability = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut DarpiConfig, cli: &CliOverrides) {
        if let Some(v) = cli.iterations {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = cli.histogram_bins {
            config.statistics.histogram_bins = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::parse("<serialization>", e))
    }
}

/// Read and parse one environment variable. Unset is `None`; a value that
/// does not parse is an error rather than a silent fallback.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<T>().map(Some).map_err(|_| ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("cannot parse `{val}`"),
        }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
