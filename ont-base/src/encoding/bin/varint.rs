// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::{DecodeError, OntRead, OntWrite};

#[inline]
pub fn write_varint<W: OntWrite + ?Sized>(writer: &mut W, value: u64) {
    let mut buf = [0u8; 9];
    let (len, data) = to_varint_le(value, &mut buf);
    writer.write_bytes(&data[..len]);
}

/// Reads a var-int, rejecting encodings that are wider than the value needs.
#[inline]
pub fn read_varint<R: OntRead + ?Sized>(reader: &mut R) -> Result<u64, DecodeError> {
    let tag = reader.read_u8()?;
    match tag {
        value @ 0x00..=0xFC => Ok(value as u64),
        0xFD => {
            let value = reader.read_u16()?;
            if value < 0xFD {
                Err(DecodeError::MalformedLengthPrefix(0xFD))
            } else {
                Ok(value as u64)
            }
        }
        0xFE => {
            let value = reader.read_u32()?;
            if value < 0x0001_0000 {
                Err(DecodeError::MalformedLengthPrefix(0xFE))
            } else {
                Ok(value as u64)
            }
        }
        0xFF => {
            let value = reader.read_u64()?;
            if value < 0x0000_0001_0000_0000 {
                Err(DecodeError::MalformedLengthPrefix(0xFF))
            } else {
                Ok(value)
            }
        }
    }
}

#[inline]
pub fn to_varint_le(value: u64, scratch: &mut [u8; 9]) -> (usize, [u8; 9]) {
    scratch.fill(0);
    if value < 0xFD {
        scratch[0] = value as u8;
        (1, *scratch)
    } else if value <= 0xFFFF {
        scratch[0] = 0xFD;
        scratch[1..3].copy_from_slice(&(value as u16).to_le_bytes());
        (3, *scratch)
    } else if value <= 0xFFFF_FFFF {
        scratch[0] = 0xFE;
        scratch[1..5].copy_from_slice(&(value as u32).to_le_bytes());
        (5, *scratch)
    } else {
        scratch[0] = 0xFF;
        scratch[1..9].copy_from_slice(&value.to_le_bytes());
        (9, *scratch)
    }
}

/// Number of bytes the var-int encoding of `value` occupies.
#[inline]
pub fn var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

/// Number of bytes a var-bytes field holding `len` bytes occupies.
#[inline]
pub fn var_bytes_size(len: usize) -> usize {
    var_size(len as u64) + len
}
