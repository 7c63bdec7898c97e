// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::encoding::{
    trim_0x, DecodeError, FromBase58Check, FromBase58CheckError, OntDecode, OntEncode, OntRead,
    OntWrite, ToBase58Check, ToRevHex,
};

/// Version byte prepended to an address before base58check encoding.
pub const ADDRESS_VERSION: u8 = 0x17;

const ADDR_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address: invalid length {length}, expected 20 bytes")]
    InvalidLength { length: usize },

    #[error("address: invalid hex")]
    InvalidHex,

    #[error("address: {0}")]
    Base58(#[from] FromBase58CheckError),
}

/// 20-byte account or contract address.
///
/// Stored in wire order. The text forms are base58check with
/// [`ADDRESS_VERSION`] and reversed hex.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; ADDR_LEN]);

impl Address {
    pub const LENGTH: usize = ADDR_LEN;
    pub const ZERO: Self = Self([0u8; ADDR_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; ADDR_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; ADDR_LEN] = slice
            .try_into()
            .map_err(|_| AddressError::InvalidLength {
                length: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDR_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [u8; ADDR_LEN] {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn to_base58(&self) -> String {
        self.0.to_base58_check(Some(ADDRESS_VERSION))
    }

    pub fn from_base58(value: &str) -> Result<Self, AddressError> {
        let payload = Vec::from_base58_check(value, Some(ADDRESS_VERSION))?;
        Self::from_slice(&payload)
    }

    /// Reversed-byte hex, the form contract addresses are usually quoted in.
    pub fn to_hex_string(&self) -> String {
        self.0.to_rev_hex_lower()
    }

    pub fn from_hex_str(value: &str) -> Result<Self, AddressError> {
        let mut bytes = hex::decode(trim_0x(value.trim())).map_err(|_| AddressError::InvalidHex)?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDR_LEN]> for Address {
    #[inline]
    fn from(value: [u8; ADDR_LEN]) -> Self {
        Self(value)
    }
}

impl From<Address> for [u8; ADDR_LEN] {
    #[inline]
    fn from(value: Address) -> Self {
        value.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Accepts either the base58 form or 40 hex digits (with optional `0x`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trim_0x(trimmed);
        if digits.len() == ADDR_LEN * 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Self::from_hex_str(digits)
        } else {
            Self::from_base58(trimmed)
        }
    }
}

impl OntEncode for Address {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_bytes(&self.0);
    }

    fn encoded_len(&self) -> usize {
        ADDR_LEN
    }
}

impl OntDecode for Address {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        let mut buf = [0u8; ADDR_LEN];
        reader.read_into(&mut buf)?;
        Ok(Self(buf))
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
