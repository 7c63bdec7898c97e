// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DeployCode, InvokeCode, MutableTransaction, Payload, TxType};
use crate::contract::SmartContract;

/// Transaction format version understood by current nodes.
pub const VERSION_TRANSACTION: u8 = 0;

/// Fee-market parameters, passed through to the envelope untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GasFee {
    pub gas_price: u64,
    pub gas_limit: u64,
}

impl GasFee {
    pub const ZERO: Self = Self {
        gas_price: 0,
        gas_limit: 0,
    };

    pub const fn new(gas_price: u64, gas_limit: u64) -> Self {
        Self {
            gas_price,
            gas_limit,
        }
    }
}

/// Freshness nonce: current Unix time in seconds, truncated to 32 bits.
pub fn current_nonce() -> u32 {
    chrono::Utc::now().timestamp() as u32
}

fn envelope(version: u8, tx_type: TxType, fee: GasFee, payload: Payload) -> MutableTransaction {
    MutableTransaction {
        version,
        tx_type,
        nonce: current_nonce(),
        gas_price: fee.gas_price,
        gas_limit: fee.gas_limit,
        payer: Address::ZERO,
        payload,
        sigs: Vec::new(),
    }
}

/// Unsigned deploy transaction carrying `contract` as its payload.
pub fn new_deploy_wasm_vm_code_transaction(
    version: u8,
    fee: GasFee,
    contract: &SmartContract,
) -> MutableTransaction {
    let tx = envelope(
        version,
        TxType::Deploy,
        fee,
        Payload::DeployCode(DeployCode::from(contract)),
    );
    debug!(
        nonce = tx.nonce,
        code_len = contract.code.len(),
        name = %contract.name,
        "built wasm deploy transaction"
    );
    tx
}

/// Unsigned WASM invoke transaction; `invoke_code` becomes the payload verbatim.
pub fn new_invoke_wasm_transaction(
    version: u8,
    fee: GasFee,
    invoke_code: Vec<u8>,
) -> MutableTransaction {
    let code_len = invoke_code.len();
    let tx = envelope(
        version,
        TxType::InvokeWasm,
        fee,
        Payload::InvokeCode(InvokeCode { code: invoke_code }),
    );
    debug!(nonce = tx.nonce, code_len, "built wasm invoke transaction");
    tx
}
