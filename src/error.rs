// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Errors surfaced by the SDK boundary.

use ont_base::encoding::{EncodeError, FromHexError};
use ont_core::ParamError;
use thiserror::Error;

/// Error type collaborators report through; the SDK forwards it without
/// interpreting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("build wasm contract param failed: {0}")]
    Param(#[from] ParamError),

    #[error("encode invoke payload failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("code hex decode error: {0}")]
    CodeHex(#[from] FromHexError),

    #[error("sign transaction error: {0}")]
    Sign(#[source] BoxError),

    #[error("SendRawTransaction error: {0}")]
    Send(#[source] BoxError),

    #[error("PreExecTransaction error: {0}")]
    PreExec(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, SdkError>;
