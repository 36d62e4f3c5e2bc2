//! Verdict aggregation for threat-intelligence lookups.
//!
//! Providers (reputation services, sandboxes, blocklists) are queried
//! elsewhere; this crate takes their completed outcomes for one indicator
//! and produces a single score, verdict and per-provider audit trail.
//!
//! ```
//! use threat_verdict::{
//!     Confidence, FinalVerdict, ProviderOutcome, ProviderResponse, ProviderVerdict,
//!     TrustLevel, TrustPolicy, compute_score,
//! };
//!
//! let policy = TrustPolicy::default().with_provider("virustotal", TrustLevel::High);
//! let outcomes = vec![
//!     ProviderOutcome::success(
//!         "virustotal",
//!         ProviderResponse::new(ProviderVerdict::Malicious, Confidence::High),
//!     ),
//!     ProviderOutcome::timeout("otx"),
//! ];
//!
//! let result = compute_score(&outcomes, &policy);
//! assert_eq!(result.final_score, Some(100));
//! assert_eq!(result.verdict, FinalVerdict::Malicious);
//! assert!(result.meta.single_provider_mode);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod input;
pub mod policy;
pub mod reporter;
pub mod scoring;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError};
pub use error::{Result, VerdictError};
pub use input::LookupBatch;
pub use policy::{PolicyError, ScoringTables, TrustPolicy};
pub use reporter::{
    Reporter, VerdictReport, json::JsonReporter, terminal::TerminalReporter,
};
pub use scoring::{AggregationEngine, VerdictAggregator, compute_score};
pub use types::{
    AggregationMeta, AggregationResult, Confidence, Execution, FinalVerdict, ProcessedProvider,
    ProviderOutcome, ProviderResponse, ProviderStatus, ProviderVerdict, TrustLevel,
};
