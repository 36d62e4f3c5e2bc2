//! Aggregation output and the per-provider audit trail.

use serde::{Deserialize, Serialize};

use super::outcome::ProviderStatus;
use super::verdict::{Confidence, FinalVerdict, ProviderVerdict, TrustLevel};

/// Audit record for one input provider. Scoring fields are `None` for
/// providers that did not contribute a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedProvider {
    pub provider: String,
    pub status: ProviderStatus,
    pub normalized_score: Option<f64>,
    pub effective_weight: Option<f64>,
    pub verdict: Option<ProviderVerdict>,
    pub confidence: Option<Confidence>,
    pub trust_level: Option<TrustLevel>,
}

impl ProcessedProvider {
    /// Record for a provider that produced no usable signal.
    pub fn skipped(provider: impl Into<String>, status: ProviderStatus) -> Self {
        Self {
            provider: provider.into(),
            status,
            normalized_score: None,
            effective_weight: None,
            verdict: None,
            confidence: None,
            trust_level: None,
        }
    }

    pub fn contributed(&self) -> bool {
        self.normalized_score.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationMeta {
    pub total_providers: usize,
    pub successful_providers: usize,
    pub failed_providers: usize,
    pub timed_out_providers: usize,
    pub single_provider_mode: bool,
    pub has_conflicting_signals: bool,
}

/// Final decision for one lookup batch.
///
/// `final_score == None` together with [`FinalVerdict::Unknown`] means no
/// usable signal was available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub final_score: Option<u8>,
    pub verdict: FinalVerdict,
    pub processed_providers: Vec<ProcessedProvider>,
    pub meta: AggregationMeta,
}

impl AggregationResult {
    pub fn has_signal(&self) -> bool {
        self.final_score.is_some()
    }
}
