//! Customers Repository
//!
//! Append-only store holding one JSON record per line.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;

use crate::customers::{errors::CustomerError, models::Customer};

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE: &str = "clientes.txt";

/// File-backed customers repository.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    path: PathBuf,
}

impl CustomerRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a customer record, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written, or the record cannot be encoded.
    pub fn save(&self, customer: &Customer) -> Result<(), CustomerError> {
        let mut line = serde_json::to_string(customer)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;

        Ok(())
    }

    /// Load every stored customer keyed by CNPJ. Later records replace earlier
    /// ones with the same CNPJ; a missing file loads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is not a valid record.
    pub fn load(&self) -> Result<FxHashMap<i64, Customer>, CustomerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(FxHashMap::default());
            }
            Err(error) => return Err(error.into()),
        };

        let mut customers = FxHashMap::default();

        for line in BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let customer: Customer = serde_json::from_str(line)?;

            customers.insert(customer.cnpj, customer);
        }

        Ok(customers)
    }
}

impl Default for CustomerRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORE)
    }
}
