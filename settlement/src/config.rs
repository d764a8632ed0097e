//! Configuration for the settlement engine

use group_core::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Absolute tolerance below which a balance counts as settled
    /// (default: one minor currency unit, 0.01)
    pub tolerance: Decimal,

    /// Emit a warning when solver input does not sum to zero
    ///
    /// Diagnostic only; the produced plan is unchanged either way.
    pub check_zero_sum: bool,

    /// Description tag for synthetic settlement expenses
    pub settlement_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: money::settled_tolerance(),
            check_zero_sum: false,
            settlement_tag: "Settlement".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(value) = std::env::var("SETTLEMENT_CHECK_ZERO_SUM") {
            config.check_zero_sum = matches!(value.as_str(), "1" | "true" | "yes");
        }

        if let Ok(tag) = std::env::var("SETTLEMENT_TAG") {
            config.settlement_tag = tag;
        }

        if let Ok(value) = std::env::var("SETTLEMENT_TOLERANCE") {
            config.tolerance = value
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid tolerance: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.tolerance < Decimal::ZERO {
            return Err(crate::Error::Config(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
