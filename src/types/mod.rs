//! Domain types for verdict aggregation.

pub mod outcome;
pub mod result;
pub mod verdict;

pub use outcome::{Execution, ProviderOutcome, ProviderResponse, ProviderStatus};
pub use result::{AggregationMeta, AggregationResult, ProcessedProvider};
pub use verdict::{Confidence, FinalVerdict, ProviderVerdict, TrustLevel};
