// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Collaborators the SDK drives but does not implement: the account that
//! signs, and the node connection that broadcasts and simulates.

use async_trait::async_trait;
use ont_base::UInt256;
use ont_core::MutableTransaction;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// An account able to authorize transactions.
#[async_trait]
pub trait TxSigner: Send + Sync {
    /// Sets the payer if it is still unset and appends this account's witness.
    async fn sign_to_transaction(&self, tx: &mut MutableTransaction) -> Result<(), BoxError>;
}

/// Connection to a node.
#[async_trait]
pub trait TxTransport: Send + Sync {
    /// Broadcasts a signed transaction and returns its hash.
    async fn send_transaction(&self, tx: &MutableTransaction) -> Result<UInt256, BoxError>;

    /// Executes a transaction against current state without committing it.
    async fn pre_exec_transaction(&self, tx: &MutableTransaction)
        -> Result<PreExecResult, BoxError>;
}

/// Outcome of a pre-execution, as reported by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreExecResult {
    #[serde(rename = "State")]
    pub state: u8,

    #[serde(rename = "Gas")]
    pub gas: u64,

    #[serde(rename = "Result", default)]
    pub result: serde_json::Value,

    #[serde(rename = "Notify", default)]
    pub notify: Vec<NotifyEventInfo>,
}

impl PreExecResult {
    /// Whether the VM halted normally.
    pub fn succeeded(&self) -> bool {
        self.state == 1
    }
}

/// A notification emitted by a contract during execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyEventInfo {
    #[serde(rename = "ContractAddress")]
    pub contract_address: String,

    #[serde(rename = "States", default)]
    pub states: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_exec_result_from_node_json() {
        let json = r#"{
            "State": 1,
            "Gas": 20000,
            "Result": "0a00000000000000",
            "Notify": [{"ContractAddress": "0200000000000000000000000000000000000000", "States": ["transfer", 10]}]
        }"#;

        let result: PreExecResult = serde_json::from_str(json).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.gas, 20000);
        assert_eq!(result.result, serde_json::json!("0a00000000000000"));
        assert_eq!(result.notify.len(), 1);
        assert_eq!(result.notify[0].states, serde_json::json!(["transfer", 10]));
    }

    #[test]
    fn pre_exec_result_without_optional_fields() {
        let result: PreExecResult = serde_json::from_str(r#"{"State": 0, "Gas": 0}"#).unwrap();
        assert!(!result.succeeded());
        assert!(result.notify.is_empty());
        assert!(result.result.is_null());
    }
}
