use thiserror::Error;

use crate::config::ConfigError;
use crate::policy::PolicyError;

/// Errors raised around the aggregation engine: reading batches, loading
/// configuration and writing reports. Scoring itself never fails.
#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("Failed to read input: {path}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid provider batch: {0}")]
    InvalidBatch(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("Failed to write output: {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VerdictError>;
