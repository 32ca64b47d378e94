//! Error types for trigform operations.

use thiserror::Error;

/// Result type for trigform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing, combining or parsing polar-form
/// complex numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Construction was attempted with a negative modulus.
    #[error("modulus must be non-negative, got {0}")]
    InvalidArgument(f64),

    /// Division by a value whose modulus is exactly zero.
    #[error("division by a complex number with zero modulus")]
    DivisionByZero,

    /// Parse input was empty or whitespace-only.
    #[error("input string is empty")]
    EmptyInput,

    /// Parse input did not match the canonical pattern, or a matched number
    /// could not be converted.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
