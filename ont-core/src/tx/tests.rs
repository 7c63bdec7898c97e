use ont_base::{
    encoding::{DecodeError, EncodeError, OntEncode},
    Address,
};

use super::*;
use crate::{contract::SmartContract, wasm::TxStruct};

fn sample_contract() -> SmartContract {
    SmartContract::new(vec![0x00, 0x61, 0x73, 0x6d])
        .need_storage(1)
        .name("counter")
        .version("1.0")
        .author("alice")
        .email("alice@example.com")
        .description("a counter")
}

fn sample_invoke() -> MutableTransaction {
    let record = TxStruct::new(vec![0u8; 20], "init", 0, Vec::new());
    new_invoke_wasm_transaction(
        VERSION_TRANSACTION,
        GasFee::new(2500, 20000),
        record.serialize().unwrap(),
    )
}

#[test]
fn deploy_builder_passes_fields_through() {
    let contract = sample_contract();
    let tx = new_deploy_wasm_vm_code_transaction(
        VERSION_TRANSACTION,
        GasFee::new(500, 30000),
        &contract,
    );

    assert_eq!(tx.version, VERSION_TRANSACTION);
    assert_eq!(tx.tx_type, TxType::Deploy);
    assert_eq!(tx.gas_price, 500);
    assert_eq!(tx.gas_limit, 30000);
    assert_eq!(tx.payer, Address::ZERO);
    assert!(tx.sigs.is_empty());
    assert_eq!(tx.payload, Payload::DeployCode(DeployCode::from(contract)));
    assert!(tx.invoke_code().is_none());
}

#[test]
fn invoke_builder_keeps_record_bytes() {
    let record = TxStruct::new(vec![0x42; 20], "add", 1, vec![1, 0, 0, 0]);
    let bytes = record.serialize().unwrap();
    let tx = new_invoke_wasm_transaction(VERSION_TRANSACTION, GasFee::ZERO, bytes.clone());

    assert_eq!(tx.tx_type, TxType::InvokeWasm);
    assert_eq!(tx.invoke_code(), Some(bytes.as_slice()));
    assert_eq!(TxStruct::deserialize(tx.invoke_code().unwrap()).unwrap(), record);
}

#[test]
fn nonce_tracks_wall_clock() {
    let before = chrono::Utc::now().timestamp() as u32;
    let tx = sample_invoke();
    let after = chrono::Utc::now().timestamp() as u32;
    assert!(tx.nonce >= before && tx.nonce <= after);
}

#[test]
fn unsigned_layout() {
    let mut tx = sample_invoke();
    tx.nonce = 0x0A0B0C0D;
    let bytes = tx.unsigned_bytes();

    assert_eq!(bytes[0], VERSION_TRANSACTION);
    assert_eq!(bytes[1], 0xd2);
    assert_eq!(&bytes[2..6], &[0x0D, 0x0C, 0x0B, 0x0A]);
    assert_eq!(&bytes[6..14], &2500u64.to_le_bytes());
    assert_eq!(&bytes[14..22], &20000u64.to_le_bytes());
    assert_eq!(&bytes[22..42], &[0u8; 20]);

    let code = tx.invoke_code().unwrap();
    assert_eq!(bytes[42] as usize, code.len());
    assert_eq!(&bytes[43..43 + code.len()], code);
    assert_eq!(&bytes[43 + code.len()..], &[0x00]);
}

#[test]
fn signed_roundtrip() {
    let mut tx = sample_invoke();
    tx.payer = Address::new([0x07; 20]);
    tx.sigs.push(RawSig::new(vec![0x40; 65], vec![0x21; 35]));

    let bytes = tx.serialize().unwrap();
    assert_eq!(bytes.len(), tx.encoded_len());
    assert_eq!(MutableTransaction::deserialize(&bytes).unwrap(), tx);
}

#[test]
fn deploy_roundtrip() {
    let contract = sample_contract();
    let tx = new_deploy_wasm_vm_code_transaction(VERSION_TRANSACTION, GasFee::new(1, 2), &contract);
    let bytes = tx.serialize().unwrap();
    assert_eq!(bytes.len(), tx.encoded_len());
    assert_eq!(MutableTransaction::deserialize(&bytes).unwrap(), tx);
}

#[test]
fn serialize_refuses_payload_of_other_type() {
    let mut tx = sample_invoke();
    tx.tx_type = TxType::Deploy;
    assert_eq!(tx.serialize(), Err(EncodeError::PayloadMismatch(0xd0)));

    let contract = sample_contract();
    let mut tx = new_deploy_wasm_vm_code_transaction(VERSION_TRANSACTION, GasFee::ZERO, &contract);
    tx.tx_type = TxType::InvokeWasm;
    assert_eq!(tx.serialize(), Err(EncodeError::PayloadMismatch(0xd2)));

    // legacy invoke type carries the same payload shape
    let mut tx = sample_invoke();
    tx.tx_type = TxType::Invoke;
    let bytes = tx.serialize().unwrap();
    assert_eq!(MutableTransaction::deserialize(&bytes).unwrap(), tx);
}

#[test]
fn hash_ignores_signatures() {
    let mut tx = sample_invoke();
    let unsigned = tx.hash();
    tx.sigs.push(RawSig::new(vec![1], vec![2]));
    assert_eq!(tx.hash(), unsigned);

    tx.gas_price += 1;
    assert_ne!(tx.hash(), unsigned);
}

#[test]
fn rejects_attributes() {
    let tx = sample_invoke();
    let mut bytes = tx.unsigned_bytes();
    *bytes.last_mut().unwrap() = 0x01;
    bytes.push(0x00);
    assert_eq!(
        MutableTransaction::deserialize(&bytes),
        Err(DecodeError::InvalidValue("transaction attributes"))
    );
}

#[test]
fn rejects_unknown_type() {
    let tx = sample_invoke();
    let mut bytes = tx.serialize().unwrap();
    bytes[1] = 0x42;
    assert_eq!(
        MutableTransaction::deserialize(&bytes),
        Err(DecodeError::InvalidValue("transaction type"))
    );
}

#[test]
fn rejects_too_many_sigs() {
    let mut tx = sample_invoke();
    tx.sigs = vec![RawSig::default(); MAX_SIG_COUNT as usize + 1];
    let bytes = tx.serialize().unwrap();
    assert_eq!(
        MutableTransaction::deserialize(&bytes),
        Err(DecodeError::LengthOutOfRange {
            len: MAX_SIG_COUNT + 1,
            max: MAX_SIG_COUNT
        })
    );
}

#[test]
fn payload_kind_matches_tx_type() {
    let deploy = Payload::DeployCode(DeployCode::default());
    let invoke = Payload::InvokeCode(InvokeCode::default());
    assert!(deploy.matches(TxType::Deploy));
    assert!(!deploy.matches(TxType::InvokeWasm));
    assert!(invoke.matches(TxType::InvokeWasm));
    assert!(invoke.matches(TxType::Invoke));
    assert!(!invoke.matches(TxType::Deploy));
}

#[test]
fn tx_type_bytes() {
    assert_eq!(TxType::Deploy.as_u8(), 0xd0);
    assert_eq!(TxType::Invoke.as_u8(), 0xd1);
    assert_eq!(TxType::InvokeWasm.as_u8(), 0xd2);
    assert_eq!(TxType::try_from(0xd2), Ok(TxType::InvokeWasm));
    assert!(TxType::try_from(0x00).is_err());
}
