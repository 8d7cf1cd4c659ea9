// Central Error Type for the Application

use num_bigint::BigUint;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(#[from] crate::domain::DecodeError),

    #[error("Generator error: {0}")]
    Generator(#[from] crate::port::GeneratorError),

    #[error("Factor mismatch in record {index}: {factor1} * {factor2} = {product}, expected {sprime}")]
    FactorMismatch {
        index: usize,
        sprime: BigUint,
        factor1: BigUint,
        factor2: BigUint,
        product: BigUint,
    },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
