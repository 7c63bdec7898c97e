// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::{encoding::trim_0x, Address, UInt256};
use serde_json::{Map, Value};

use super::{build_wasm_contract_param, ParamError, WasmParam};

impl WasmParam {
    /// Maps a loosely typed JSON argument onto a [`WasmParam`].
    ///
    /// Accepted shapes:
    /// * a string becomes `Str`
    /// * an integer becomes `I32` when it fits, `I64` otherwise
    /// * an array of integers in `0..=255` becomes `Bytes`
    /// * `{"type": ..., "value": ...}` with type `string`, `int`, `long`,
    ///   `bytes` (hex), `hash` (hex) or `address` (base58 or hex)
    ///
    /// Everything else is rejected with
    /// [`ParamError::UnsupportedParameterType`] naming the value.
    pub fn from_json(value: &Value) -> Result<Self, ParamError> {
        let param = match value {
            Value::String(text) => Some(WasmParam::Str(text.clone())),
            Value::Number(number) => number.as_i64().map(|n| match i32::try_from(n) {
                Ok(small) => WasmParam::I32(small),
                Err(_) => WasmParam::I64(n),
            }),
            Value::Array(items) => byte_array(items).map(WasmParam::Bytes),
            Value::Object(fields) => typed_object(fields),
            Value::Null | Value::Bool(_) => None,
        };

        param.ok_or_else(|| unsupported(value))
    }
}

/// Encodes loosely typed arguments; fails as a whole on the first value that
/// has no [`WasmParam`] mapping.
pub fn build_wasm_contract_param_json(params: &[Value]) -> Result<Vec<u8>, ParamError> {
    let params = params
        .iter()
        .map(WasmParam::from_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_wasm_contract_param(&params))
}

fn unsupported(value: &Value) -> ParamError {
    ParamError::UnsupportedParameterType(value.to_string())
}

fn byte_array(items: &[Value]) -> Option<Vec<u8>> {
    items
        .iter()
        .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}

fn typed_object(fields: &Map<String, Value>) -> Option<WasmParam> {
    if fields.len() != 2 {
        return None;
    }
    let kind = fields.get("type")?.as_str()?;
    let value = fields.get("value")?;

    match kind {
        "string" => value.as_str().map(|s| WasmParam::Str(s.to_owned())),
        "int" => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(WasmParam::I32),
        "long" => value.as_i64().map(WasmParam::I64),
        "bytes" => match value {
            Value::String(text) => hex::decode(trim_0x(text)).ok().map(WasmParam::Bytes),
            Value::Array(items) => byte_array(items).map(WasmParam::Bytes),
            _ => None,
        },
        "hash" => value
            .as_str()
            .and_then(|s| UInt256::from_hex_str(s).ok())
            .map(WasmParam::Hash),
        "address" => value
            .as_str()
            .and_then(|s| s.parse::<Address>().ok())
            .map(WasmParam::Address),
        _ => None,
    }
}
