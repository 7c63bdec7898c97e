// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::super::{DecodeError, OntDecode, OntEncode, OntRead, OntWrite};

impl OntEncode for bool {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_u8(*self as u8);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        1
    }
}

impl OntDecode for bool {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::InvalidValue("bool")),
        }
    }
}

macro_rules! impl_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl OntEncode for $ty {
            #[inline]
            fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
                writer.$write(*self);
            }

            #[inline]
            fn encoded_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }

        impl OntDecode for $ty {
            #[inline]
            fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
                reader.$read()
            }
        }
    };
}

impl_int!(u8, write_u8, read_u8);
impl_int!(u16, write_u16, read_u16);
impl_int!(u32, write_u32, read_u32);
impl_int!(u64, write_u64, read_u64);
impl_int!(i32, write_i32, read_i32);
impl_int!(i64, write_i64, read_i64);
