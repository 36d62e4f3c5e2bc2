//! Signal extraction from raw provider outcomes.

use crate::policy::TrustPolicy;
use crate::types::{Confidence, ProviderOutcome, ProviderStatus, ProviderVerdict, TrustLevel};

/// Resolved inputs of one successful provider, ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSignal {
    pub provider: String,
    pub verdict: ProviderVerdict,
    pub confidence: Confidence,
    pub trust_level: TrustLevel,
    pub status: ProviderStatus,
}

/// Extract a signal from a successful outcome carrying a payload.
///
/// Missing verdict or confidence fall back to `unknown` and `medium`; this is
/// the only place where payload defaults are applied.
pub fn extract_signal(outcome: &ProviderOutcome, policy: &TrustPolicy) -> Option<ProviderSignal> {
    let data = outcome.data()?;

    Some(ProviderSignal {
        provider: outcome.provider.clone(),
        verdict: data.verdict.unwrap_or_default(),
        confidence: data.confidence.unwrap_or_default(),
        trust_level: policy.trust_level_for(&outcome.provider),
        status: outcome.status(),
    })
}
