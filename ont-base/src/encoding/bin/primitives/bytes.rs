// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::super::{var_bytes_size, DecodeError, OntDecode, OntEncode, OntRead, OntWrite};

// Byte buffers and strings travel as var-bytes. Decoding is bounded by what
// is left in the reader, so a lying prefix cannot trigger a huge allocation.

impl OntEncode for [u8] {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(self);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        var_bytes_size(self.len())
    }
}

impl OntEncode for Vec<u8> {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(self);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        var_bytes_size(self.len())
    }
}

impl OntDecode for Vec<u8> {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        reader.read_var_bytes(u64::MAX)
    }
}

impl OntEncode for str {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_string(self);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        var_bytes_size(self.len())
    }
}

impl OntEncode for String {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_string(self);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        var_bytes_size(self.len())
    }
}

impl OntDecode for String {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        reader.read_var_string(u64::MAX)
    }
}
