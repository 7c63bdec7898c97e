// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::encoding::{
    decode_hex_bytes, encode_hex_bytes, var_bytes_size, DecodeError, OntDecode, OntEncode,
    OntRead, OntWrite,
};
use serde::{Deserialize, Serialize};

/// Witness attached by a signer: the invocation script carrying signatures
/// and the verification script naming the keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSig {
    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub invoke: Vec<u8>,

    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub verify: Vec<u8>,
}

impl RawSig {
    pub fn new(invoke: Vec<u8>, verify: Vec<u8>) -> Self {
        Self { invoke, verify }
    }
}

impl OntEncode for RawSig {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.invoke);
        writer.write_var_bytes(&self.verify);
    }

    fn encoded_len(&self) -> usize {
        var_bytes_size(self.invoke.len()) + var_bytes_size(self.verify.len())
    }
}

impl OntDecode for RawSig {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        let invoke = Vec::<u8>::ont_decode(reader)?;
        let verify = Vec::<u8>::ont_decode(reader)?;
        Ok(Self { invoke, verify })
    }
}
