// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Transaction construction for Ontology WASM contracts.
//!
//! [`param`] marshals call arguments, [`wasm`] wraps them into the
//! invocation record, and [`tx`] places records and deploy bundles into the
//! transaction envelope handed to signers and transports.

pub mod contract;
pub mod param;
pub mod tx;
pub mod wasm;

pub use contract::SmartContract;
pub use param::{build_wasm_contract_param, build_wasm_contract_param_json, ParamError, WasmParam};
pub use tx::{GasFee, MutableTransaction, Payload, RawSig, TxType};
pub use wasm::TxStruct;
