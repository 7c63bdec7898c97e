// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Argument marshaling for WASM contract calls.
//!
//! Arguments are not self-describing on the wire: each value is written in
//! the shape its type dictates and the contract reads them back by position.
//!
//! | kind      | encoding                          |
//! |-----------|-----------------------------------|
//! | `Str`     | var-int length + UTF-8 bytes      |
//! | `I32`     | 4 bytes little-endian             |
//! | `I64`     | 8 bytes little-endian             |
//! | `Bytes`   | var-int length + raw bytes        |
//! | `Hash`    | 32 raw bytes                      |
//! | `Address` | 20 raw bytes                      |

mod json;


use ont_base::{
    encoding::{var_bytes_size, OntEncode, OntWrite},
    Address, UInt256,
};

pub use json::build_wasm_contract_param_json;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("not a supported type: {0}")]
    UnsupportedParameterType(String),
}

/// One positional argument of a WASM contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmParam {
    Str(String),
    I32(i32),
    I64(i64),
    Bytes(Vec<u8>),
    Hash(UInt256),
    Address(Address),
}

impl OntEncode for WasmParam {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        match self {
            WasmParam::Str(value) => writer.write_var_string(value),
            WasmParam::I32(value) => writer.write_i32(*value),
            WasmParam::I64(value) => writer.write_i64(*value),
            WasmParam::Bytes(value) => writer.write_var_bytes(value),
            WasmParam::Hash(value) => value.ont_encode(writer),
            WasmParam::Address(value) => value.ont_encode(writer),
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            WasmParam::Str(value) => var_bytes_size(value.len()),
            WasmParam::I32(_) => 4,
            WasmParam::I64(_) => 8,
            WasmParam::Bytes(value) => var_bytes_size(value.len()),
            WasmParam::Hash(_) => UInt256::LENGTH,
            WasmParam::Address(_) => Address::LENGTH,
        }
    }
}

/// Concatenates the encodings of `params` in order.
pub fn build_wasm_contract_param(params: &[WasmParam]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(params.iter().map(OntEncode::encoded_len).sum());
    for param in params {
        param.ont_encode(&mut buf);
    }
    buf
}

impl From<String> for WasmParam {
    fn from(value: String) -> Self {
        WasmParam::Str(value)
    }
}

impl From<&str> for WasmParam {
    fn from(value: &str) -> Self {
        WasmParam::Str(value.to_owned())
    }
}

impl From<i32> for WasmParam {
    fn from(value: i32) -> Self {
        WasmParam::I32(value)
    }
}

impl From<i64> for WasmParam {
    fn from(value: i64) -> Self {
        WasmParam::I64(value)
    }
}

impl From<Vec<u8>> for WasmParam {
    fn from(value: Vec<u8>) -> Self {
        WasmParam::Bytes(value)
    }
}

impl From<&[u8]> for WasmParam {
    fn from(value: &[u8]) -> Self {
        WasmParam::Bytes(value.to_owned())
    }
}

impl From<UInt256> for WasmParam {
    fn from(value: UInt256) -> Self {
        WasmParam::Hash(value)
    }
}

impl From<Address> for WasmParam {
    fn from(value: Address) -> Self {
        WasmParam::Address(value)
    }
}
