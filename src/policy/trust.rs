//! Operator trust policy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::PolicyError;
use crate::types::TrustLevel;

/// Maps provider identifiers to trust levels, with a fallback for providers
/// that are not listed. Lookup is total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustPolicy {
    #[serde(alias = "providerTrust")]
    pub provider_trust: BTreeMap<String, TrustLevel>,
    #[serde(alias = "defaultTrustLevel")]
    pub default_trust_level: TrustLevel,
}

impl TrustPolicy {
    pub fn new(default_trust_level: TrustLevel) -> Self {
        Self {
            provider_trust: BTreeMap::new(),
            default_trust_level,
        }
    }

    /// Build a policy from raw strings, as read from operator settings.
    pub fn from_raw<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        default_trust_level: &str,
    ) -> Result<Self, PolicyError> {
        let mut policy = Self::new(default_trust_level.parse()?);
        for (provider, level) in entries {
            policy = policy.try_with_provider(provider, level.parse()?)?;
        }
        Ok(policy)
    }

    pub fn with_provider(mut self, provider: impl Into<String>, level: TrustLevel) -> Self {
        self.provider_trust.insert(provider.into(), level);
        self
    }

    fn try_with_provider(self, provider: &str, level: TrustLevel) -> Result<Self, PolicyError> {
        if provider.trim().is_empty() {
            return Err(PolicyError::EmptyProviderName);
        }
        Ok(self.with_provider(provider, level))
    }

    /// Resolve the trust level for a provider.
    pub fn trust_level_for(&self, provider: &str) -> TrustLevel {
        self.provider_trust
            .get(provider)
            .copied()
            .unwrap_or(self.default_trust_level)
    }

    pub fn is_configured(&self, provider: &str) -> bool {
        self.provider_trust.contains_key(provider)
    }
}
