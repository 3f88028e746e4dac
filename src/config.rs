//! Configuration
//!
//! Command line arguments with environment fallbacks. A `.env` file in the
//! working directory is loaded first.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::customers::repository::DEFAULT_STORE;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PETROBAHIA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "PETROBAHIA_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Order batch runner configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "petrobahia", about = "Price fuel orders and register customers", long_about = None)]
pub struct Config {
    /// YAML fixture with `customers` and `orders`; the built-in sample is used when omitted
    #[arg(short, long, env = "PETROBAHIA_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// File customers are appended to
    #[arg(short, long, env = "PETROBAHIA_CUSTOMERS_FILE", default_value = DEFAULT_STORE)]
    pub customers_file: PathBuf,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
