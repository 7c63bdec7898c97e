// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Wire-level building blocks shared by the Ontology transaction crates.
//!
//! Everything here is pure and allocation-local: encoders append to a caller
//! owned buffer, decoders read from a borrowed slice.

pub mod encoding;
pub mod hash;
pub mod uint;

pub use uint::{Address, AddressError, UInt256};
