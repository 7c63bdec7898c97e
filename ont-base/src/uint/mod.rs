// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod address;
#[cfg(test)]
mod tests;
mod uint256;

pub use address::{Address, AddressError, ADDRESS_VERSION};
pub use uint256::UInt256;
