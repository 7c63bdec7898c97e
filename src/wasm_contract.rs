// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Deploy and invoke WASM contracts through a node connection.

use std::sync::Arc;

use ont_base::{Address, UInt256};
use ont_config::SdkSettings;
use ont_core::{
    tx::{new_deploy_wasm_vm_code_transaction, new_invoke_wasm_transaction},
    GasFee, MutableTransaction, SmartContract, TxStruct, WasmParam,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::{PreExecResult, TxSigner, TxTransport};
use crate::error::{Result, SdkError};

/// Serialized invocation record for calling `method` on `address`.
pub fn build_invoke_payload(
    address: &Address,
    method: &str,
    version: u32,
    params: &[WasmParam],
) -> Result<Vec<u8>> {
    let record = TxStruct::with_params(address.as_bytes().to_vec(), method, version, params);
    Ok(record.serialize()?)
}

/// Maps loosely typed JSON arguments; the first unsupported value fails the batch.
pub fn params_from_json(values: &[Value]) -> Result<Vec<WasmParam>> {
    let params = values
        .iter()
        .map(WasmParam::from_json)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(params)
}

/// Contract descriptor from hex encoded code.
pub fn contract_from_hex(code: &str) -> Result<SmartContract> {
    Ok(SmartContract::from_hex_code(code)?)
}

/// WASM contract operations over a [`TxTransport`].
pub struct WasmVmContract<T> {
    transport: Arc<T>,
    settings: SdkSettings,
}

impl<T: TxTransport> WasmVmContract<T> {
    pub fn new(transport: Arc<T>, settings: SdkSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &SdkSettings {
        &self.settings
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Gas price and limit from the configured defaults.
    pub fn default_fee(&self) -> GasFee {
        GasFee::new(self.settings.gas_price, self.settings.gas_limit)
    }

    /// Unsigned deploy transaction for `contract`.
    pub fn new_deploy_wasm_vm_code_transaction(
        &self,
        fee: GasFee,
        contract: &SmartContract,
    ) -> MutableTransaction {
        new_deploy_wasm_vm_code_transaction(self.settings.tx_version, fee, contract)
    }

    /// Unsigned invoke transaction carrying `invoke_code` as its payload.
    pub fn new_invoke_wasm_transaction(
        &self,
        fee: GasFee,
        invoke_code: Vec<u8>,
    ) -> MutableTransaction {
        new_invoke_wasm_transaction(self.settings.tx_version, fee, invoke_code)
    }

    /// Builds, signs and broadcasts a deploy transaction.
    pub async fn deploy_wasm_vm_smart_contract(
        &self,
        fee: GasFee,
        signer: &dyn TxSigner,
        contract: SmartContract,
    ) -> Result<UInt256> {
        let tx = self.new_deploy_wasm_vm_code_transaction(fee, &contract);
        let hash = self.sign_and_send(tx, signer).await?;
        info!(%hash, name = %contract.name, "wasm contract deploy submitted");
        Ok(hash)
    }

    /// Builds, signs and broadcasts a call of `method` on the contract at `address`.
    pub async fn invoke_wasm_vm_smart_contract(
        &self,
        fee: GasFee,
        signer: &dyn TxSigner,
        address: &Address,
        method: &str,
        version: u32,
        params: &[WasmParam],
    ) -> Result<UInt256> {
        let payload = build_invoke_payload(address, method, version, params)?;
        let tx = self.new_invoke_wasm_transaction(fee, payload);
        let hash = self.sign_and_send(tx, signer).await?;
        info!(%hash, contract = %address, method, "wasm contract invoke submitted");
        Ok(hash)
    }

    /// Simulates a call without signing it or committing anything.
    ///
    /// The transaction is built with zero gas price and limit.
    pub async fn pre_exec_invoke_wasm_vm_contract(
        &self,
        address: &Address,
        method: &str,
        version: u32,
        params: &[WasmParam],
    ) -> Result<PreExecResult> {
        let payload = build_invoke_payload(address, method, version, params)?;
        let tx = self.new_invoke_wasm_transaction(GasFee::ZERO, payload);
        let result = self
            .transport
            .pre_exec_transaction(&tx)
            .await
            .map_err(|err| {
                warn!(contract = %address, method, error = %err, "pre-exec failed");
                SdkError::PreExec(err)
            })?;
        debug!(state = result.state, gas = result.gas, method, "pre-exec finished");
        Ok(result)
    }

    async fn sign_and_send(
        &self,
        mut tx: MutableTransaction,
        signer: &dyn TxSigner,
    ) -> Result<UInt256> {
        signer.sign_to_transaction(&mut tx).await.map_err(|err| {
            warn!(nonce = tx.nonce, error = %err, "signing failed");
            SdkError::Sign(err)
        })?;
        self.transport.send_transaction(&tx).await.map_err(|err| {
            warn!(nonce = tx.nonce, error = %err, "send failed");
            SdkError::Send(err)
        })
    }
}
