// src/error.rs
//
// Internal error type. Nothing here crosses the C boundary as-is: the ffi
// layer flattens every SdkError into `success = false` plus a message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("input is null")]
    NullInput,

    #[error("input too long: {0} bytes")]
    InputTooLong(usize),

    #[error("string contains an interior NUL byte")]
    InteriorNul,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;

impl From<std::ffi::NulError> for SdkError {
    fn from(_: std::ffi::NulError) -> Self {
        SdkError::InteriorNul
    }
}
