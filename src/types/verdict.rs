//! Categorical levels shared by providers, policy and the final decision.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Verdict reported by a single provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderVerdict {
    Benign,
    Suspicious,
    Malicious,
    #[default]
    Unknown,
}

impl ProviderVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderVerdict::Benign => "benign",
            ProviderVerdict::Suspicious => "suspicious",
            ProviderVerdict::Malicious => "malicious",
            ProviderVerdict::Unknown => "unknown",
        }
    }
}

impl FromStr for ProviderVerdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "benign" => Ok(ProviderVerdict::Benign),
            "suspicious" => Ok(ProviderVerdict::Suspicious),
            "malicious" => Ok(ProviderVerdict::Malicious),
            "unknown" => Ok(ProviderVerdict::Unknown),
            other => Err(format!("unrecognized verdict: {}", other)),
        }
    }
}

impl std::fmt::Display for ProviderVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-reported certainty about its own verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            other => Err(format!("unrecognized confidence: {}", other)),
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator-assigned reliability of a provider.
///
/// Unlike [`ProviderVerdict`] and [`Confidence`], trust levels are parsed
/// strictly: an unrecognized level is a configuration mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl TrustLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Low => "low",
            TrustLevel::Medium => "medium",
            TrustLevel::High => "high",
        }
    }
}

impl FromStr for TrustLevel {
    type Err = crate::policy::PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TrustLevel::Low),
            "medium" => Ok(TrustLevel::Medium),
            "high" => Ok(TrustLevel::High),
            _ => Err(crate::policy::PolicyError::InvalidTrustLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined decision for an indicator.
///
/// Variants are declared in severity order so that `Ord` can be used to
/// gate on a minimum verdict.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FinalVerdict {
    #[default]
    #[value(skip)]
    Unknown,
    Benign,
    Suspicious,
    Malicious,
}

impl FinalVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalVerdict::Unknown => "unknown",
            FinalVerdict::Benign => "benign",
            FinalVerdict::Suspicious => "suspicious",
            FinalVerdict::Malicious => "malicious",
        }
    }
}

impl std::fmt::Display for FinalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
