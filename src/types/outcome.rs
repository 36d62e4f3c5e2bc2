//! Provider execution outcomes as handed over by the provider executor.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::verdict::{Confidence, ProviderVerdict};

/// Execution status of one provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Success,
    Timeout,
    Error,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStatus::Success => "success",
            ProviderStatus::Timeout => "timeout",
            ProviderStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized response of a provider that completed successfully.
///
/// `verdict` and `confidence` are parsed leniently: a missing, null or
/// unrecognized value is kept as `None` and defaulted during signal extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub verdict: Option<ProviderVerdict>,
    #[serde(
        default,
        deserialize_with = "lenient_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ProviderResponse {
    pub fn new(verdict: ProviderVerdict, confidence: Confidence) -> Self {
        Self {
            verdict: Some(verdict),
            confidence: Some(confidence),
            ..Self::default()
        }
    }
}

/// Outcome of one provider execution. Only the success arm carries a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Execution {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<ProviderResponse>,
    },
    Timeout,
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl Execution {
    pub fn status(&self) -> ProviderStatus {
        match self {
            Execution::Success { .. } => ProviderStatus::Success,
            Execution::Timeout => ProviderStatus::Timeout,
            Execution::Error { .. } => ProviderStatus::Error,
        }
    }
}

/// One provider's entry in a lookup batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    pub provider: String,
    #[serde(flatten)]
    pub execution: Execution,
}

impl ProviderOutcome {
    pub fn success(provider: impl Into<String>, data: ProviderResponse) -> Self {
        Self {
            provider: provider.into(),
            execution: Execution::Success { data: Some(data) },
        }
    }

    pub fn timeout(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            execution: Execution::Timeout,
        }
    }

    pub fn error(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            execution: Execution::Error {
                message: Some(message.into()),
            },
        }
    }

    pub fn status(&self) -> ProviderStatus {
        self.execution.status()
    }

    /// Payload of a successful execution, if any.
    pub fn data(&self) -> Option<&ProviderResponse> {
        match &self.execution {
            Execution::Success { data } => data.as_ref(),
            _ => None,
        }
    }
}

fn lenient_level<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}
