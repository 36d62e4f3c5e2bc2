//! Normalization of verdicts and computation of effective weights.

use crate::policy::ScoringTables;
use crate::types::{Confidence, ProviderVerdict, TrustLevel};

/// Map a provider verdict onto the 0-100 risk scale.
pub fn normalize_verdict(tables: &ScoringTables, verdict: ProviderVerdict) -> f64 {
    tables.verdict_score(verdict)
}

/// Influence of a provider on the combined score: trust weight times confidence multiplier.
pub fn effective_weight(tables: &ScoringTables, trust: TrustLevel, confidence: Confidence) -> f64 {
    tables.trust_weight(trust) * tables.confidence_multiplier(confidence)
}
