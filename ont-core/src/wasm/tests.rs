use ont_base::encoding::{DecodeError, OntDecode, OntEncode, SliceReader};
use proptest::prelude::*;

use super::TxStruct;
use crate::param::WasmParam;

fn init_record() -> TxStruct {
    TxStruct::new(vec![0u8; 20], "init", 0, Vec::new())
}

#[test]
fn init_record_layout() {
    let bytes = init_record().serialize().unwrap();

    let mut expected = vec![0x14];
    expected.extend_from_slice(&[0u8; 20]);
    expected.push(0x04);
    expected.extend_from_slice(b"init");
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    expected.push(0x00);

    assert_eq!(bytes, expected);
    assert_eq!(bytes.len(), init_record().encoded_len());
    assert_eq!(TxStruct::deserialize(&bytes).unwrap(), init_record());
}

#[test]
fn version_is_little_endian() {
    let record = TxStruct::new(vec![1], "m", 0x0102_0304, vec![9]);
    let bytes = record.serialize().unwrap();
    assert_eq!(bytes, [0x01, 0x01, 0x01, b'm', 0x04, 0x03, 0x02, 0x01, 0x01, 0x09]);
}

#[test]
fn with_params_embeds_encoded_args() {
    let params: Vec<WasmParam> = vec!["hi".into(), 7i32.into()];
    let record = TxStruct::with_params(vec![0xAB; 20], "transfer", 1, &params);
    assert_eq!(record.args, [0x02, b'h', b'i', 0x07, 0x00, 0x00, 0x00]);
    assert_eq!(record.method, b"transfer");
}

#[test]
fn every_strict_prefix_is_rejected() {
    let record = TxStruct::new(vec![0x11; 20], "balanceOf", 3, vec![0x22; 40]);
    let bytes = record.serialize().unwrap();

    for len in 0..bytes.len() {
        assert!(
            TxStruct::deserialize(&bytes[..len]).is_err(),
            "prefix of {len} bytes decoded"
        );
    }
}

#[test]
fn declared_length_past_end_is_truncation() {
    // address claims 20 bytes, only 3 follow
    let data = [0x14, 0x00, 0x00, 0x00];
    assert_eq!(
        TxStruct::deserialize(&data),
        Err(DecodeError::Truncated {
            needed: 20,
            remaining: 3
        })
    );
}

#[test]
fn non_canonical_prefix_is_rejected() {
    let data = [0xFD, 0x01, 0x00, 0xAA];
    assert_eq!(
        TxStruct::deserialize(&data),
        Err(DecodeError::MalformedLengthPrefix(0xFD))
    );
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = init_record().serialize().unwrap();
    bytes.push(0xEE);
    assert_eq!(
        TxStruct::deserialize(&bytes),
        Err(DecodeError::TrailingBytes(1))
    );
}

#[test]
fn streaming_decode_stops_at_record_end() {
    let first = init_record();
    let second = TxStruct::new(vec![0x01; 20], "run", 2, vec![0xFF]);
    let mut buf = first.encode_to_vec();
    second.ont_encode(&mut buf);

    let mut reader = SliceReader::new(&buf);
    assert_eq!(TxStruct::ont_decode(&mut reader).unwrap(), first);
    assert_eq!(reader.consumed(), first.encoded_len());
    assert_eq!(TxStruct::ont_decode(&mut reader).unwrap(), second);
    reader.finish().unwrap();
}

#[test]
fn json_uses_hex_fields() {
    let record = TxStruct::new(vec![0xAB, 0xCD], "init", 5, vec![0x01]);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "address": "abcd",
            "method": "696e6974",
            "version": 5,
            "args": "01",
        })
    );
    let back: TxStruct = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

fn any_record() -> impl Strategy<Value = TxStruct> {
    (
        proptest::collection::vec(any::<u8>(), 0..64),
        proptest::collection::vec(any::<u8>(), 0..300),
        any::<u32>(),
        proptest::collection::vec(any::<u8>(), 0..70_000),
    )
        .prop_map(|(address, method, version, args)| TxStruct {
            address,
            method,
            version,
            args,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip(record in any_record()) {
        let bytes = record.serialize().unwrap();
        prop_assert_eq!(bytes.len(), record.encoded_len());
        prop_assert_eq!(TxStruct::deserialize(&bytes).unwrap(), record);
    }

    #[test]
    fn truncation_is_detected(record in any_record(), cut in any::<prop::sample::Index>()) {
        let bytes = record.serialize().unwrap();
        let len = cut.index(bytes.len());
        prop_assert!(TxStruct::deserialize(&bytes[..len]).is_err());
    }
}
