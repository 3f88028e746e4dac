//! Customer Models

use serde::{Deserialize, Serialize};

/// Customer Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// CNPJ (company tax id)
    pub cnpj: i64,
}

impl Customer {
    /// Create a customer record.
    pub fn new(name: impl Into<String>, email: impl Into<String>, cnpj: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cnpj,
        }
    }
}
