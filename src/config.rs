//! Configuration for the calculator front ends.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::relativity::special::{C, Calculator, DomainError};

/// Settings read from an optional TOML file. Every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Speed of light in m/s.
    pub speed_of_light: f64,
    pub tui: TuiConfig,
}

/// Starting state of the terminal UI.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Slider increment as a fraction of c.
    pub step: f64,
    /// Rocket-frame location in light-seconds.
    pub rocket_location: f64,
    /// Rocket-frame time in seconds.
    pub rocket_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_of_light: C,
            tui: TuiConfig::default(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            rocket_location: 0.0,
            rocket_time: 10.0,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("tui.step must lie strictly between 0 and 1, got {0}")]
    Step(f64),
    #[error("tui.{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calculator()?;
        if !(self.tui.step > 0.0 && self.tui.step < 1.0) {
            return Err(ConfigError::Step(self.tui.step));
        }
        for (field, value) in [
            ("rocket_location", self.tui.rocket_location),
            ("rocket_time", self.tui.rocket_time),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    pub fn calculator(&self) -> Result<Calculator, DomainError> {
        Calculator::new(self.speed_of_light)
    }
}
