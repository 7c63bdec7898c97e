// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod base58;
mod bin;
mod hex;

pub use self::base58::*;
pub use self::bin::*;
pub use self::hex::*;

use serde::{de::Error, Deserialize, Deserializer, Serializer};

/// Serializes a byte buffer as a lower-case hex string.
#[inline]
pub fn encode_hex_bytes<S: Serializer>(item: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&::hex::encode(item))
}

/// Deserializes a byte buffer from a hex string, accepting an optional `0x` prefix.
#[inline]
pub fn decode_hex_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let text: String = Deserialize::deserialize(deserializer)?;
    ::hex::decode(trim_0x(&text)).map_err(D::Error::custom)
}
