//! Network type

use serde::{Deserialize, Serialize};

/// Ontology network the SDK builds transactions for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    MainNet,
    /// Polaris test network
    TestNet,
    /// Private/local network
    Private,
}

impl NetworkType {
    /// Lowest gas price the network's nodes accept into their pool
    #[must_use]
    pub const fn min_gas_price(&self) -> u64 {
        match self {
            Self::MainNet | Self::TestNet => 2500,
            Self::Private => 0,
        }
    }
}

impl std::str::FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::MainNet),
            "testnet" | "test" | "polaris" => Ok(Self::TestNet),
            "private" | "local" => Ok(Self::Private),
            other => Err(format!("unknown network '{other}'")),
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MainNet => write!(f, "mainnet"),
            Self::TestNet => write!(f, "testnet"),
            Self::Private => write!(f, "private"),
        }
    }
}
