// Domain Error Types

use thiserror::Error;

/// Failures while decoding or encoding length-prefixed fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Truncated length header at offset {offset}: need 4 bytes, {available} available")]
    TruncatedLength { offset: usize, available: usize },

    #[error(
        "Truncated value at offset {offset}: header declares {declared} bytes, {available} available"
    )]
    TruncatedValue {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("Value needs {required} bytes but field size is {size}")]
    ValueTooWide { required: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
