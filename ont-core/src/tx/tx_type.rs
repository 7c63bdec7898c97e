// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::encoding::{DecodeError, OntDecode, OntEncode, OntRead, OntWrite};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TxType {
    Deploy = 0xd0,
    Invoke = 0xd1,
    InvokeWasm = 0xd2,
}

impl TxType {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TxType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xd0 => Ok(TxType::Deploy),
            0xd1 => Ok(TxType::Invoke),
            0xd2 => Ok(TxType::InvokeWasm),
            _ => Err(DecodeError::InvalidValue("transaction type")),
        }
    }
}

impl OntEncode for TxType {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_u8(self.as_u8());
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl OntDecode for TxType {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        TxType::try_from(reader.read_u8()?)
    }
}
