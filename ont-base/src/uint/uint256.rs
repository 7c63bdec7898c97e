// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::encoding::{trim_0x, DecodeError, OntDecode, OntEncode, OntRead, OntWrite, ToRevHex};

const U256_LEN: usize = 32;

/// 256-bit hash (transaction id, block hash), little-endian in memory and
/// big-endian when formatted.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct UInt256([u8; U256_LEN]);

impl UInt256 {
    pub const LENGTH: usize = U256_LEN;
    pub const ZERO: Self = Self([0u8; U256_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; U256_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
        let bytes: [u8; U256_LEN] = slice.try_into().map_err(|_| DecodeError::LengthOutOfRange {
            len: slice.len() as u64,
            max: U256_LEN as u64,
        })?;
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; U256_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [u8; U256_LEN] {
        self.0
    }

    pub fn to_hex_string(&self) -> String {
        self.0.to_rev_hex_lower()
    }

    pub fn from_hex_str(value: &str) -> Result<Self, DecodeError> {
        let digits = trim_0x(value.trim());
        if digits.len() != U256_LEN * 2 {
            return Err(DecodeError::LengthOutOfRange {
                len: digits.len() as u64 / 2,
                max: U256_LEN as u64,
            });
        }
        let mut bytes = hex::decode(digits).map_err(|_| DecodeError::InvalidValue("UInt256 hex"))?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; U256_LEN]> for UInt256 {
    #[inline]
    fn from(value: [u8; U256_LEN]) -> Self {
        Self(value)
    }
}

impl From<UInt256> for [u8; U256_LEN] {
    #[inline]
    fn from(value: UInt256) -> Self {
        value.0
    }
}

impl Display for UInt256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for UInt256 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl OntEncode for UInt256 {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_bytes(&self.0);
    }

    fn encoded_len(&self) -> usize {
        U256_LEN
    }
}

impl OntDecode for UInt256 {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        let mut buf = [0u8; U256_LEN];
        reader.read_into(&mut buf)?;
        Ok(Self(buf))
    }
}

impl serde::Serialize for UInt256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for UInt256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_hex_str(&value).map_err(serde::de::Error::custom)
    }
}
