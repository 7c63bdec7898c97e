// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::collections::TryReserveError;

/// Failure to read a value from the binary wire format.
///
/// Every variant means the input is structurally invalid for the type being
/// decoded; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("decode: truncated input, need {needed} bytes but {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    #[error("decode: malformed length prefix, non-canonical var-int tag 0x{0:02X}")]
    MalformedLengthPrefix(u8),

    #[error("decode: declared length {len} out of range (max {max})")]
    LengthOutOfRange { len: u64, max: u64 },

    #[error("decode: {0} unexpected trailing bytes")]
    TrailingBytes(usize),

    #[error("decode: invalid {0}")]
    InvalidValue(&'static str),
}

/// Failure to produce a value in the binary wire format.
///
/// Writing into memory never fails on byte content. Encoding fails when the
/// output buffer cannot be reserved, or when a tagged value carries a body
/// its own tag would not decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("encode: cannot reserve output buffer: {0}")]
    Reserve(#[from] TryReserveError),

    #[error("encode: payload does not match type tag 0x{0:02X}")]
    PayloadMismatch(u8),
}
