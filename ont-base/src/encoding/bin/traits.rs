// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::{read_varint, write_varint, DecodeError, EncodeError};

/// All values that can be encoded into the Ontology binary wire format implement this trait.
pub trait OntEncode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W);

    /// Exact number of bytes `ont_encode` appends.
    fn encoded_len(&self) -> usize {
        self.encode_to_vec().len()
    }

    #[inline]
    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.ont_encode(&mut buf);
        buf
    }

    /// Like [`OntEncode::encode_to_vec`], but reserves the whole buffer up front and
    /// reports allocation failure instead of aborting.
    fn try_encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.encoded_len())?;
        self.ont_encode(&mut buf);
        Ok(buf)
    }
}

/// Values that can be decoded from the Ontology binary wire format implement this trait.
pub trait OntDecode: Sized {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError>;
}

/// Writer abstraction that matches the Ontology binary format.
pub trait OntWrite {
    /// Append raw bytes to the destination buffer.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Number of bytes written so far.
    fn bytes_written(&self) -> usize;

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    #[inline]
    fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_varint(&mut self, value: u64)
    where
        Self: Sized,
    {
        write_varint(self, value);
    }

    #[inline]
    fn write_var_bytes(&mut self, value: &[u8])
    where
        Self: Sized,
    {
        write_varint(self, value.len() as u64);
        self.write_bytes(value);
    }

    #[inline]
    fn write_var_string(&mut self, value: &str)
    where
        Self: Sized,
    {
        self.write_var_bytes(value.as_bytes());
    }
}

impl OntWrite for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.len()
    }
}

/// Reader abstraction for the Ontology binary format.
pub trait OntRead {
    /// Attempt to read exactly `buf.len()` bytes into the provided slice.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), DecodeError>;

    /// Remaining bytes that can be read from this reader.
    fn remaining(&self) -> usize;

    #[inline]
    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.read_into(&mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.read_into(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.read_into(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let mut buf = [0u8; 8];
        self.read_into(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32, DecodeError> {
        let mut buf = [0u8; 4];
        self.read_into(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64, DecodeError> {
        let mut buf = [0u8; 8];
        self.read_into(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    #[inline]
    fn read_varint(&mut self) -> Result<u64, DecodeError>
    where
        Self: Sized,
    {
        read_varint(self)
    }

    /// Reads a var-int length followed by that many bytes.
    ///
    /// The length is checked against `max` and against the bytes actually
    /// left in the reader before anything is allocated.
    fn read_var_bytes(&mut self, max: u64) -> Result<Vec<u8>, DecodeError>
    where
        Self: Sized,
    {
        let len = self.read_varint()?;
        if len > max {
            return Err(DecodeError::LengthOutOfRange { len, max });
        }

        let remaining = self.remaining();
        if len > remaining as u64 {
            return Err(DecodeError::Truncated {
                needed: usize::try_from(len).unwrap_or(usize::MAX),
                remaining,
            });
        }

        let mut buf = vec![0u8; len as usize];
        self.read_into(buf.as_mut_slice())?;
        Ok(buf)
    }

    fn read_var_string(&mut self, max: u64) -> Result<String, DecodeError>
    where
        Self: Sized,
    {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes).map_err(|_| DecodeError::InvalidValue("utf-8 string"))
    }
}
