//! SDK settings
//!
//! Defaults used when building transactions; callers can still pass explicit
//! gas values per call.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::NetworkType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings applied to every transaction the SDK builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkSettings {
    /// Target network
    #[serde(default)]
    pub network: NetworkType,

    /// Transaction format version written into the envelope
    #[serde(default = "default_tx_version")]
    pub tx_version: u8,

    /// Default gas price
    #[serde(default = "default_gas_price")]
    pub gas_price: u64,

    /// Default gas limit
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
}

fn default_tx_version() -> u8 {
    0
}

fn default_gas_price() -> u64 {
    2500
}

fn default_gas_limit() -> u64 {
    20000
}

impl Default for SdkSettings {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            tx_version: default_tx_version(),
            gas_price: default_gas_price(),
            gas_limit: default_gas_limit(),
        }
    }
}

impl SdkSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), network = %settings.network, "loaded sdk settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gas_limit == 0 {
            return Err(ConfigError::Invalid("gas_limit must be non-zero".into()));
        }
        let min = self.network.min_gas_price();
        if self.gas_price < min {
            return Err(ConfigError::Invalid(format!(
                "gas_price {} is below the {} minimum of {min}",
                self.gas_price, self.network
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = SdkSettings::default();
        assert_eq!(settings.network, NetworkType::MainNet);
        assert_eq!(settings.tx_version, 0);
        assert_eq!(settings.gas_price, 2500);
        assert_eq!(settings.gas_limit, 20000);
        settings.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = SdkSettings::from_toml_str("gas_limit = 50000\n").unwrap();
        assert_eq!(settings.gas_limit, 50000);
        assert_eq!(settings.gas_price, 2500);
        assert_eq!(settings, SdkSettings { gas_limit: 50000, ..Default::default() });
    }

    #[test]
    fn test_private_network_allows_zero_price() {
        let settings =
            SdkSettings::from_toml_str("network = \"private\"\ngas_price = 0\n").unwrap();
        assert_eq!(settings.network, NetworkType::Private);
        assert_eq!(settings.gas_price, 0);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            SdkSettings::from_toml_str("gas_limit = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SdkSettings::from_toml_str("gas_price = 1\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SdkSettings::from_toml_str("gas_price = \"cheap\"\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network = \"testnet\"").unwrap();
        writeln!(file, "tx_version = 0").unwrap();
        writeln!(file, "gas_price = 3000").unwrap();

        let settings = SdkSettings::load(file.path()).unwrap();
        assert_eq!(settings.network, NetworkType::TestNet);
        assert_eq!(settings.gas_price, 3000);
        assert_eq!(settings.gas_limit, 20000);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SdkSettings::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
