//! Aggregation engine: turns a batch of provider outcomes into one verdict.

use tracing::{debug, trace};

use super::classify::{classify, has_conflicting_signals};
use super::combine::{Combination, WeightedSignal, combine};
use super::signal::extract_signal;
use super::weighting::{effective_weight, normalize_verdict};
use crate::policy::{PolicyError, ScoringTables, TrustPolicy};
use crate::types::{
    AggregationMeta, AggregationResult, FinalVerdict, ProcessedProvider, ProviderOutcome,
    ProviderStatus,
};

/// Combines per-provider outcomes into a final verdict.
///
/// Implementations must be total: every input maps to a result.
pub trait VerdictAggregator: Send + Sync {
    fn aggregate(&self, outcomes: &[ProviderOutcome], policy: &TrustPolicy) -> AggregationResult;
}

/// Stateless engine holding a validated set of scoring tables.
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    tables: ScoringTables,
}

impl AggregationEngine {
    pub fn new(tables: ScoringTables) -> Result<Self, PolicyError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn compute_score(
        &self,
        outcomes: &[ProviderOutcome],
        policy: &TrustPolicy,
    ) -> AggregationResult {
        let mut meta = AggregationMeta {
            total_providers: outcomes.len(),
            ..AggregationMeta::default()
        };
        let mut processed_providers = Vec::with_capacity(outcomes.len());
        let mut signals = Vec::with_capacity(outcomes.len());

        for outcome in outcomes {
            match outcome.status() {
                ProviderStatus::Success => meta.successful_providers += 1,
                ProviderStatus::Timeout => meta.timed_out_providers += 1,
                ProviderStatus::Error => meta.failed_providers += 1,
            }

            let Some(signal) = extract_signal(outcome, policy) else {
                trace!(provider = %outcome.provider, status = %outcome.status(), "No signal");
                processed_providers.push(ProcessedProvider::skipped(
                    outcome.provider.clone(),
                    outcome.status(),
                ));
                continue;
            };

            let normalized_score = normalize_verdict(&self.tables, signal.verdict);
            let weight = effective_weight(&self.tables, signal.trust_level, signal.confidence);
            debug!(
                provider = %signal.provider,
                verdict = %signal.verdict,
                confidence = %signal.confidence,
                trust = %signal.trust_level,
                trust_configured = policy.is_configured(&signal.provider),
                normalized_score,
                weight,
                "Extracted provider signal"
            );

            signals.push(WeightedSignal {
                normalized_score,
                effective_weight: weight,
            });
            processed_providers.push(ProcessedProvider {
                provider: signal.provider,
                status: signal.status,
                normalized_score: Some(normalized_score),
                effective_weight: Some(weight),
                verdict: Some(signal.verdict),
                confidence: Some(signal.confidence),
                trust_level: Some(signal.trust_level),
            });
        }

        meta.single_provider_mode = signals.len() == 1;

        let (final_score, verdict) = match combine(&signals) {
            Combination::NoSignals | Combination::ZeroWeight | Combination::NonFinite => {
                (None, FinalVerdict::Unknown)
            }
            Combination::Scored(score) => {
                meta.has_conflicting_signals =
                    has_conflicting_signals(signals.iter().map(|s| s.normalized_score));
                (Some(score), classify(score, meta.has_conflicting_signals))
            }
        };

        debug!(
            final_score = ?final_score,
            verdict = %verdict,
            valid_signals = signals.len(),
            conflicting = meta.has_conflicting_signals,
            "Aggregated provider verdicts"
        );

        AggregationResult {
            final_score,
            verdict,
            processed_providers,
            meta,
        }
    }
}

impl VerdictAggregator for AggregationEngine {
    fn aggregate(&self, outcomes: &[ProviderOutcome], policy: &TrustPolicy) -> AggregationResult {
        self.compute_score(outcomes, policy)
    }
}

/// Score a batch with the default tables.
pub fn compute_score(outcomes: &[ProviderOutcome], policy: &TrustPolicy) -> AggregationResult {
    AggregationEngine::default().compute_score(outcomes, policy)
}
