// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod builder;
mod payload;
mod sig;
mod transaction;
mod tx_type;

#[cfg(test)]
mod tests;

pub use builder::{
    current_nonce, new_deploy_wasm_vm_code_transaction, new_invoke_wasm_transaction, GasFee,
    VERSION_TRANSACTION,
};
pub use payload::{DeployCode, InvokeCode, Payload};
pub use sig::RawSig;
pub use transaction::{MutableTransaction, MAX_SIG_COUNT};
pub use tx_type::TxType;
