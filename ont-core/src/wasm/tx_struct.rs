// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::encoding::{
    decode_hex_bytes, encode_hex_bytes, var_bytes_size, DecodeError, EncodeError, OntDecode,
    OntEncode, OntRead, OntWrite, SliceReader,
};
use serde::{Deserialize, Serialize};

use crate::param::{build_wasm_contract_param, WasmParam};

/// Invocation record of a WASM contract call.
///
/// Wire layout, in order:
/// `[address: var-bytes][method: var-bytes][version: u32 LE][args: var-bytes]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxStruct {
    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub address: Vec<u8>,

    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub method: Vec<u8>,

    pub version: u32,

    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub args: Vec<u8>,
}

impl TxStruct {
    pub fn new(
        address: impl Into<Vec<u8>>,
        method: impl Into<Vec<u8>>,
        version: u32,
        args: Vec<u8>,
    ) -> Self {
        Self {
            address: address.into(),
            method: method.into(),
            version,
            args,
        }
    }

    /// Record whose `args` are the encoding of `params`.
    pub fn with_params(
        address: impl Into<Vec<u8>>,
        method: impl Into<Vec<u8>>,
        version: u32,
        params: &[WasmParam],
    ) -> Self {
        Self::new(address, method, version, build_wasm_contract_param(params))
    }

    /// Serializes into a freshly reserved buffer.
    ///
    /// Content never makes this fail; only failing to reserve the buffer does.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        self.try_encode_to_vec()
    }

    /// Decodes a record that must span all of `data`.
    pub fn deserialize(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = SliceReader::new(data);
        let record = Self::ont_decode(&mut reader)?;
        reader.finish()?;
        Ok(record)
    }
}

impl OntEncode for TxStruct {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.address);
        writer.write_var_bytes(&self.method);
        writer.write_u32(self.version);
        writer.write_var_bytes(&self.args);
    }

    fn encoded_len(&self) -> usize {
        var_bytes_size(self.address.len())
            + var_bytes_size(self.method.len())
            + 4
            + var_bytes_size(self.args.len())
    }
}

impl OntDecode for TxStruct {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        let address = Vec::<u8>::ont_decode(reader)?;
        let method = Vec::<u8>::ont_decode(reader)?;
        let version = reader.read_u32()?;
        let args = Vec::<u8>::ont_decode(reader)?;
        Ok(Self {
            address,
            method,
            version,
            args,
        })
    }
}
