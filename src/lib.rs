// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Client-side SDK for Ontology WASM smart contracts.
//!
//! Builds deploy and invoke transactions, hands them to a [`TxSigner`] and
//! submits or pre-executes them through a [`TxTransport`].

pub mod client;
pub mod error;
pub mod wasm_contract;

pub use client::{NotifyEventInfo, PreExecResult, TxSigner, TxTransport};
pub use error::{BoxError, Result, SdkError};
pub use wasm_contract::{build_invoke_payload, contract_from_hex, params_from_json, WasmVmContract};

pub use ont_base;
pub use ont_config;
pub use ont_core;

pub mod prelude {
    pub use crate::{PreExecResult, SdkError, TxSigner, TxTransport, WasmVmContract};
    pub use ont_base::{Address, UInt256};
    pub use ont_config::{NetworkType, SdkSettings};
    pub use ont_core::{GasFee, MutableTransaction, SmartContract, TxStruct, WasmParam};
}
