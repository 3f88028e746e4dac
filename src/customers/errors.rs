//! Customer errors.

use thiserror::Error;

/// Customer registration and storage errors.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Email address failed validation.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// CNPJ is not a positive number.
    #[error("invalid CNPJ: {0}")]
    InvalidCnpj(i64),

    /// Email pattern failed to compile.
    #[error("invalid email pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading or writing the store failed.
    #[error("customer store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("malformed customer record: {0}")]
    Json(#[from] serde_json::Error),
}
