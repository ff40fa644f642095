//! Signal configuration for the optimizer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration parameters for the intersection model.
///
/// Only `discharge_per_step` changes the optimizer's behavior. The remaining
/// fields are declared bounds that a stricter model could enforce; the
/// optimizer lets any phase follow any other and never caps queue lengths
/// or horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Vehicles a green phase clears from its queue in one step.
    pub discharge_per_step: u64,

    /// Minimum number of consecutive green steps (declared, not enforced).
    pub min_green_steps: u32,

    /// Minimum number of consecutive all-red steps (declared, not enforced).
    pub min_red_steps: u32,

    /// Largest queue length the model is sized for (declared, not enforced).
    pub max_queue: u64,

    /// Longest horizon the model is sized for (declared, not enforced).
    pub max_horizon: usize,
}

impl SignalConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        discharge_per_step: u64,
        min_green_steps: u32,
        min_red_steps: u32,
        max_queue: u64,
        max_horizon: usize,
    ) -> Self {
        Self {
            discharge_per_step,
            min_green_steps,
            min_red_steps,
            max_queue,
            max_horizon,
        }
    }

    /// Create a default configuration with a different discharge capacity.
    pub fn with_discharge(discharge_per_step: u64) -> Self {
        Self {
            discharge_per_step,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            discharge_per_step: 10,
            min_green_steps: 10,
            min_red_steps: 3,
            max_queue: 100,
            max_horizon: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = SignalConfig::default();

        assert_eq!(config.discharge_per_step, 10);
        assert_eq!(config.min_green_steps, 10);
        assert_eq!(config.min_red_steps, 3);
        assert_eq!(config.max_queue, 100);
        assert_eq!(config.max_horizon, 100);
    }

    #[test]
    fn custom_config() {
        let config = SignalConfig::new(4, 2, 1, 50, 20);

        assert_eq!(config.discharge_per_step, 4);
        assert_eq!(config.min_green_steps, 2);
        assert_eq!(config.min_red_steps, 1);
        assert_eq!(config.max_queue, 50);
        assert_eq!(config.max_horizon, 20);
    }

    #[test]
    fn with_discharge_keeps_other_defaults() {
        let config = SignalConfig::with_discharge(3);
        assert_eq!(config.discharge_per_step, 3);
        assert_eq!(config.min_red_steps, 3);
        assert_eq!(config.max_horizon, 100);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = SignalConfig::from_toml_str("").unwrap();
        assert_eq!(config, SignalConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config =
            SignalConfig::from_toml_str("discharge_per_step = 6\nmax_queue = 40\n").unwrap();
        assert_eq!(config.discharge_per_step, 6);
        assert_eq!(config.max_queue, 40);
        assert_eq!(config.min_red_steps, 3);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = SignalConfig::from_toml_str("discharge_per_step = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discharge_per_step = 12").unwrap();
        writeln!(file, "min_red_steps = 2").unwrap();

        let config = SignalConfig::load_from(file.path()).unwrap();
        assert_eq!(config.discharge_per_step, 12);
        assert_eq!(config.min_red_steps, 2);
        assert_eq!(config.min_green_steps, 10);
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = SignalConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
