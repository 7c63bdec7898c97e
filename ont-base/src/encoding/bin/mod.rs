// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod error;
mod primitives;
mod reader;
mod traits;
mod varint;


pub use error::{DecodeError, EncodeError};
pub use reader::SliceReader;
pub use traits::{OntDecode, OntEncode, OntRead, OntWrite};
pub use varint::{read_varint, to_varint_le, var_bytes_size, var_size, write_varint};
