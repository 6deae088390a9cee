//! Application configuration loaded from an optional TOML file.
//!
//! Every key is optional; anything left out keeps its default.
//!
//! ```toml
//! [policy]
//! efficiency_gain_rate = "0.20"
//! months_per_year = 12
//!
//! [display]
//! currency_symbol = "€"
//! grouping_separator = "."
//! decimal_separator = ","
//! symbol_after = true
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use savings_core::SavingsPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

/// How currency amounts are rendered for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Place the symbol after the number (`1.000,00 €`) instead of before it.
    pub symbol_after: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            grouping_separator: '.',
            decimal_separator: ',',
            symbol_after: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: SavingsPolicy,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Reads and validates the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.policy.efficiency_gain_rate;
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ConfigError::InvalidPolicy(format!(
                "efficiency_gain_rate must be between 0 and 1, got {rate}"
            )));
        }
        if self.policy.months_per_year == 0 {
            return Err(ConfigError::InvalidPolicy(
                "months_per_year must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
