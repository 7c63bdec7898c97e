use super::*;
use crate::encoding::{DecodeError, OntDecode, OntEncode, SliceReader};

const SAMPLE_BASE58: &str = "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";

#[test]
fn address_base58_roundtrip() {
    let address = Address::from_base58(SAMPLE_BASE58).unwrap();
    assert_eq!(address.to_base58(), SAMPLE_BASE58);
    assert_eq!(address.to_string(), SAMPLE_BASE58);
    assert_eq!(address.as_bytes()[0], 0xe4);
}

#[test]
fn address_hex_is_reversed() {
    let mut raw = [0u8; 20];
    raw[0] = 0x01;
    let address = Address::new(raw);
    assert_eq!(
        address.to_hex_string(),
        "0000000000000000000000000000000000000001"
    );
    assert_eq!(
        Address::from_hex_str("0x0000000000000000000000000000000000000001").unwrap(),
        address
    );
}

#[test]
fn address_from_str_accepts_both_forms() {
    let from_b58: Address = SAMPLE_BASE58.parse().unwrap();
    let from_hex: Address = from_b58.to_hex_string().parse().unwrap();
    assert_eq!(from_b58, from_hex);

    assert!("not-an-address".parse::<Address>().is_err());
}

#[test]
fn address_rejects_wrong_length() {
    assert_eq!(
        Address::from_slice(&[0u8; 19]),
        Err(AddressError::InvalidLength { length: 19 })
    );
    assert_eq!(Address::from_hex_str("zz"), Err(AddressError::InvalidHex));
}

#[test]
fn address_is_written_raw() {
    let address = Address::new([0xAB; 20]);
    let bytes = address.encode_to_vec();
    assert_eq!(bytes, vec![0xAB; 20]);

    let mut reader = SliceReader::new(&bytes);
    assert_eq!(Address::ont_decode(&mut reader).unwrap(), address);
}

#[test]
fn address_serde_uses_base58() {
    let address = Address::from_base58(SAMPLE_BASE58).unwrap();
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, format!("\"{SAMPLE_BASE58}\""));
    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
}

#[test]
fn uint256_hex_roundtrip() {
    let mut raw = [0u8; 32];
    raw[31] = 0xFF;
    let hash = UInt256::new(raw);
    let text = hash.to_string();
    assert!(text.starts_with("ff"));
    assert_eq!(text.len(), 64);
    assert_eq!(text.parse::<UInt256>().unwrap(), hash);
    assert_eq!(UInt256::from_hex_str(&format!("0x{text}")).unwrap(), hash);
}

#[test]
fn uint256_rejects_bad_input() {
    assert_eq!(
        UInt256::from_hex_str("abcd"),
        Err(DecodeError::LengthOutOfRange { len: 2, max: 32 })
    );
    assert!(UInt256::from_slice(&[0u8; 31]).is_err());
}

#[test]
fn uint256_is_written_raw() {
    let hash = UInt256::new([0x11; 32]);
    let bytes = hash.encode_to_vec();
    assert_eq!(bytes.len(), 32);

    let mut reader = SliceReader::new(&bytes[..31]);
    assert_eq!(
        UInt256::ont_decode(&mut reader),
        Err(DecodeError::Truncated {
            needed: 32,
            remaining: 31
        })
    );
}
