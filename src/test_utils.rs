#[cfg(test)]
pub mod fixtures {
    use crate::policy::TrustPolicy;
    use crate::scoring::compute_score;
    use crate::types::{
        AggregationResult, Confidence, ProviderOutcome, ProviderResponse, ProviderVerdict,
        TrustLevel,
    };

    pub fn success(provider: &str, verdict: ProviderVerdict, confidence: Confidence) -> ProviderOutcome {
        ProviderOutcome::success(provider, ProviderResponse::new(verdict, confidence))
    }

    pub fn high_trust_policy(providers: &[&str]) -> TrustPolicy {
        providers
            .iter()
            .fold(TrustPolicy::default(), |policy, name| {
                policy.with_provider(*name, TrustLevel::High)
            })
    }

    /// Mixed batch: one malicious, one benign, one timeout, one error.
    pub fn mixed_outcomes() -> Vec<ProviderOutcome> {
        vec![
            success("virustotal", ProviderVerdict::Malicious, Confidence::High),
            success("abuseipdb", ProviderVerdict::Benign, Confidence::High),
            ProviderOutcome::timeout("shodan"),
            ProviderOutcome::error("otx", "HTTP 503"),
        ]
    }

    pub fn mixed_result() -> AggregationResult {
        compute_score(
            &mixed_outcomes(),
            &high_trust_policy(&["virustotal", "abuseipdb"]),
        )
    }
}
