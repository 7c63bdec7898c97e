// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::encoding::{
    decode_hex_bytes, encode_hex_bytes, var_bytes_size, DecodeError, OntDecode, OntEncode,
    OntRead, OntWrite,
};
use serde::{Deserialize, Serialize};

use super::TxType;
use crate::contract::SmartContract;

/// Deploy payload: the contract code followed by its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeployCode {
    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub code: Vec<u8>,
    pub need_storage: u8,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl From<&SmartContract> for DeployCode {
    fn from(contract: &SmartContract) -> Self {
        Self {
            code: contract.code.clone(),
            need_storage: contract.need_storage,
            name: contract.name.clone(),
            version: contract.version.clone(),
            author: contract.author.clone(),
            email: contract.email.clone(),
            description: contract.description.clone(),
        }
    }
}

impl From<SmartContract> for DeployCode {
    fn from(contract: SmartContract) -> Self {
        Self {
            code: contract.code,
            need_storage: contract.need_storage,
            name: contract.name,
            version: contract.version,
            author: contract.author,
            email: contract.email,
            description: contract.description,
        }
    }
}

impl OntEncode for DeployCode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.code);
        writer.write_u8(self.need_storage);
        writer.write_var_string(&self.name);
        writer.write_var_string(&self.version);
        writer.write_var_string(&self.author);
        writer.write_var_string(&self.email);
        writer.write_var_string(&self.description);
    }

    fn encoded_len(&self) -> usize {
        var_bytes_size(self.code.len())
            + 1
            + [
                &self.name,
                &self.version,
                &self.author,
                &self.email,
                &self.description,
            ]
            .iter()
            .map(|s| var_bytes_size(s.len()))
            .sum::<usize>()
    }
}

impl OntDecode for DeployCode {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        Ok(Self {
            code: Vec::<u8>::ont_decode(reader)?,
            need_storage: reader.read_u8()?,
            name: String::ont_decode(reader)?,
            version: String::ont_decode(reader)?,
            author: String::ont_decode(reader)?,
            email: String::ont_decode(reader)?,
            description: String::ont_decode(reader)?,
        })
    }
}

/// Invoke payload. For WASM calls `code` is a serialized
/// [`TxStruct`](crate::wasm::TxStruct), carried untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvokeCode {
    #[serde(serialize_with = "encode_hex_bytes", deserialize_with = "decode_hex_bytes")]
    pub code: Vec<u8>,
}

impl OntEncode for InvokeCode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.code);
    }

    fn encoded_len(&self) -> usize {
        var_bytes_size(self.code.len())
    }
}

impl OntDecode for InvokeCode {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        Ok(Self {
            code: Vec::<u8>::ont_decode(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    DeployCode(DeployCode),
    InvokeCode(InvokeCode),
}

impl Payload {
    /// Decodes the payload shape that `tx_type` carries.
    pub fn decode_for<R: OntRead>(tx_type: TxType, reader: &mut R) -> Result<Self, DecodeError> {
        match tx_type {
            TxType::Deploy => DeployCode::ont_decode(reader).map(Payload::DeployCode),
            TxType::Invoke | TxType::InvokeWasm => {
                InvokeCode::ont_decode(reader).map(Payload::InvokeCode)
            }
        }
    }

    /// Whether this payload may travel in a transaction of `tx_type`.
    pub fn matches(&self, tx_type: TxType) -> bool {
        matches!(
            (self, tx_type),
            (Payload::DeployCode(_), TxType::Deploy)
                | (Payload::InvokeCode(_), TxType::Invoke | TxType::InvokeWasm)
        )
    }
}

impl OntEncode for Payload {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        match self {
            Payload::DeployCode(deploy) => deploy.ont_encode(writer),
            Payload::InvokeCode(invoke) => invoke.ont_encode(writer),
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Payload::DeployCode(deploy) => deploy.encoded_len(),
            Payload::InvokeCode(invoke) => invoke.encoded_len(),
        }
    }
}
