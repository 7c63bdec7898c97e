// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod tx_struct;

#[cfg(test)]
mod tests;

pub use tx_struct::TxStruct;
