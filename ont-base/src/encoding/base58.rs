// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::hash::Sha256Twice;

pub trait ToBase58Check {
    fn to_base58_check(&self, prefix: Option<u8>) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self, prefix: Option<u8>) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(1 + src.len() + 4);

        if let Some(prefix) = prefix {
            buf.push(prefix);
        }
        buf.extend_from_slice(src);

        let check = buf.sha256_twice();
        buf.extend_from_slice(&check[..4]);

        bs58::encode(buf).into_string()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum FromBase58CheckError {
    #[error("base58check: invalid character '{0}'")]
    InvalidChar(char),

    #[error("base58check: invalid length")]
    InvalidLength,

    #[error("base58check: invalid checksum")]
    InvalidChecksum,

    #[error("base58check: expected prefix {0} but got {1}")]
    InvalidPrefix(u8, u8),
}

pub trait FromBase58Check: Sized {
    type Error;

    fn from_base58_check<T: AsRef<str>>(src: T, prefix: Option<u8>) -> Result<Self, Self::Error>;
}

impl FromBase58Check for Vec<u8> {
    type Error = FromBase58CheckError;

    fn from_base58_check<T: AsRef<str>>(
        src: T,
        prefix: Option<u8>,
    ) -> Result<Vec<u8>, Self::Error> {
        let decoded = bs58::decode(src.as_ref())
            .into_vec()
            .map_err(|err| match err {
                bs58::decode::Error::InvalidCharacter { character, .. } => {
                    FromBase58CheckError::InvalidChar(character)
                }
                _ => FromBase58CheckError::InvalidLength,
            })?;

        let min_size = if prefix.is_some() { 6 } else { 5 };
        if decoded.len() < min_size {
            return Err(FromBase58CheckError::InvalidLength);
        }

        let (body, check) = decoded.split_at(decoded.len() - 4);
        if body.sha256_twice()[..4] != *check {
            return Err(FromBase58CheckError::InvalidChecksum);
        }

        match prefix {
            Some(prefix) if body[0] != prefix => {
                Err(FromBase58CheckError::InvalidPrefix(prefix, body[0]))
            }
            Some(_) => Ok(body[1..].to_vec()),
            None => Ok(body.to_vec()),
        }
    }
}
