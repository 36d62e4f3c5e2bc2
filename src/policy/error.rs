//! Policy validation error types.

/// Raised when a trust policy or scoring table is built from invalid data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid trust level '{0}' (expected low, medium or high)")]
    InvalidTrustLevel(String),

    #[error("Provider identifier must not be empty")]
    EmptyProviderName,

    #[error("Invalid {table} entry '{key}': {value} (must be between 0 and {max})")]
    InvalidTableEntry {
        table: &'static str,
        key: &'static str,
        value: f64,
        max: f64,
    },
}
