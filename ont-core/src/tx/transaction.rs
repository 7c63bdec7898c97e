// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use ont_base::{
    encoding::{
        var_size, DecodeError, EncodeError, OntDecode, OntEncode, OntRead, OntWrite, SliceReader,
    },
    hash::Sha256Twice,
    Address, UInt256,
};
use serde::{Deserialize, Serialize};

use super::{Payload, RawSig, TxType};

/// Upper bound on witnesses a node accepts on one transaction.
pub const MAX_SIG_COUNT: u64 = 16;

/// Transaction envelope as it is assembled client-side, before and after signing.
///
/// Unsigned layout:
/// `version u8, tx_type u8, nonce u32, gas_price u64, gas_limit u64,
/// payer [20], payload, attribute count var-int (always 0)`;
/// the signed form appends the witnesses as a var-int counted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutableTransaction {
    pub version: u8,
    pub tx_type: TxType,
    pub nonce: u32,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub payer: Address,
    pub payload: Payload,
    pub sigs: Vec<RawSig>,
}

impl MutableTransaction {
    /// Writes the part of the transaction covered by signatures.
    pub fn encode_unsigned<W: OntWrite>(&self, writer: &mut W) {
        writer.write_u8(self.version);
        self.tx_type.ont_encode(writer);
        writer.write_u32(self.nonce);
        writer.write_u64(self.gas_price);
        writer.write_u64(self.gas_limit);
        self.payer.ont_encode(writer);
        self.payload.ont_encode(writer);
        // attributes are not used by this protocol version
        writer.write_varint(0);
    }

    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.unsigned_len());
        self.encode_unsigned(&mut buf);
        buf
    }

    /// Transaction id: double sha256 over the unsigned bytes.
    pub fn hash(&self) -> UInt256 {
        UInt256::new(self.unsigned_bytes().sha256_twice())
    }

    /// Full signed encoding into a freshly reserved buffer.
    ///
    /// Refuses a payload whose shape `tx_type` would not decode.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        if !self.payload.matches(self.tx_type) {
            return Err(EncodeError::PayloadMismatch(self.tx_type.as_u8()));
        }
        self.try_encode_to_vec()
    }

    /// Decodes a transaction that must span all of `data`.
    pub fn deserialize(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = SliceReader::new(data);
        let tx = Self::ont_decode(&mut reader)?;
        reader.finish()?;
        Ok(tx)
    }

    /// The invocation bytes carried by an invoke transaction.
    pub fn invoke_code(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::InvokeCode(invoke) => Some(&invoke.code),
            Payload::DeployCode(_) => None,
        }
    }

    fn unsigned_len(&self) -> usize {
        1 + 1 + 4 + 8 + 8 + Address::LENGTH + self.payload.encoded_len() + 1
    }
}

impl OntEncode for MutableTransaction {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        self.encode_unsigned(writer);
        writer.write_varint(self.sigs.len() as u64);
        for sig in &self.sigs {
            sig.ont_encode(writer);
        }
    }

    fn encoded_len(&self) -> usize {
        self.unsigned_len()
            + var_size(self.sigs.len() as u64)
            + self.sigs.iter().map(OntEncode::encoded_len).sum::<usize>()
    }
}

impl OntDecode for MutableTransaction {
    fn ont_decode<R: OntRead>(reader: &mut R) -> Result<Self, DecodeError> {
        let version = reader.read_u8()?;
        let tx_type = TxType::ont_decode(reader)?;
        let nonce = reader.read_u32()?;
        let gas_price = reader.read_u64()?;
        let gas_limit = reader.read_u64()?;
        let payer = Address::ont_decode(reader)?;
        let payload = Payload::decode_for(tx_type, reader)?;

        if reader.read_varint()? != 0 {
            return Err(DecodeError::InvalidValue("transaction attributes"));
        }

        let count = reader.read_varint()?;
        if count > MAX_SIG_COUNT {
            return Err(DecodeError::LengthOutOfRange {
                len: count,
                max: MAX_SIG_COUNT,
            });
        }
        let sigs = (0..count)
            .map(|_| RawSig::ont_decode(reader))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version,
            tx_type,
            nonce,
            gas_price,
            gas_limit,
            payer,
            payload,
            sigs,
        })
    }
}
