// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::encoding::{decode_hex_bytes, encode_hex_bytes, FromHexError};
use serde::{Deserialize, Serialize};

/// A contract bundle ready to be installed on chain.
///
/// Fields are carried into the deploy payload verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmartContract {
    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub code: Vec<u8>,

    /// Storage capability flag, passed through as the raw byte the node expects.
    pub need_storage: u8,

    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl SmartContract {
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }

    /// Builds a descriptor from hex encoded code.
    pub fn from_hex_code(code: &str) -> Result<Self, FromHexError> {
        Ok(Self::new(hex::decode(code.trim())?))
    }

    pub fn need_storage(mut self, flag: u8) -> Self {
        self.need_storage = flag;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
