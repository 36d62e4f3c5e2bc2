//! Verdict aggregation.
//!
//! A batch is processed in five pure steps:
//! - signal extraction (`signal`)
//! - normalization and weighting (`weighting`)
//! - weighted combination (`combine`)
//! - conflict detection and classification (`classify`)
//!
//! [`AggregationEngine`] runs them and assembles the audit trail.

pub mod classify;
pub mod combine;
pub mod engine;
pub mod signal;
pub mod weighting;

pub use classify::{classify, has_conflicting_signals};
pub use combine::{Combination, WeightedSignal, combine, round_score};
pub use engine::{AggregationEngine, VerdictAggregator, compute_score};
pub use signal::{ProviderSignal, extract_signal};
pub use weighting::{effective_weight, normalize_verdict};
