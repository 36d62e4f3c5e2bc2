//! Lookup tables used to normalize and weight provider signals.
//!
//! The tables are plain immutable data. [`ScoringTables::DEFAULT`] is the
//! compiled-in configuration; custom tables can be loaded from a config file
//! and must pass [`ScoringTables::validate`] before use.

use serde::{Deserialize, Serialize};

use super::error::PolicyError;
use crate::types::{Confidence, ProviderVerdict, TrustLevel};

/// Position of each provider verdict on the 0-100 risk scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictScores {
    pub malicious: f64,
    pub suspicious: f64,
    pub unknown: f64,
    pub benign: f64,
}

impl Default for VerdictScores {
    fn default() -> Self {
        ScoringTables::DEFAULT.verdict_scores
    }
}

/// Weight applied per operator trust level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        ScoringTables::DEFAULT.trust_weights
    }
}

/// Multiplier applied per provider-reported confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceMultipliers {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for ConfidenceMultipliers {
    fn default() -> Self {
        ScoringTables::DEFAULT.confidence_multipliers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    pub verdict_scores: VerdictScores,
    pub trust_weights: TrustWeights,
    pub confidence_multipliers: ConfidenceMultipliers,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScoringTables {
    /// Upper bound for verdict scores: the top of the risk scale.
    pub const MAX_VERDICT_SCORE: f64 = 100.0;
    /// Upper bound for trust weights and confidence multipliers. Caps the
    /// weighted term of a single signal at `1e8`.
    pub const MAX_FACTOR: f64 = 1000.0;

    pub const DEFAULT: ScoringTables = ScoringTables {
        verdict_scores: VerdictScores {
            malicious: 100.0,
            suspicious: 60.0,
            unknown: 30.0,
            benign: 0.0,
        },
        trust_weights: TrustWeights {
            high: 1.0,
            medium: 0.7,
            low: 0.5,
        },
        confidence_multipliers: ConfidenceMultipliers {
            high: 1.0,
            medium: 0.75,
            low: 0.5,
        },
    };

    pub fn verdict_score(&self, verdict: ProviderVerdict) -> f64 {
        match verdict {
            ProviderVerdict::Malicious => self.verdict_scores.malicious,
            ProviderVerdict::Suspicious => self.verdict_scores.suspicious,
            ProviderVerdict::Unknown => self.verdict_scores.unknown,
            ProviderVerdict::Benign => self.verdict_scores.benign,
        }
    }

    pub fn trust_weight(&self, trust: TrustLevel) -> f64 {
        match trust {
            TrustLevel::High => self.trust_weights.high,
            TrustLevel::Medium => self.trust_weights.medium,
            TrustLevel::Low => self.trust_weights.low,
        }
    }

    pub fn confidence_multiplier(&self, confidence: Confidence) -> f64 {
        match confidence {
            Confidence::High => self.confidence_multipliers.high,
            Confidence::Medium => self.confidence_multipliers.medium,
            Confidence::Low => self.confidence_multipliers.low,
        }
    }

    /// Reject entries outside their allowed range. NaN and infinities are
    /// always rejected; zero is allowed.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let v = &self.verdict_scores;
        let t = &self.trust_weights;
        let c = &self.confidence_multipliers;
        let (score_max, factor_max) = (Self::MAX_VERDICT_SCORE, Self::MAX_FACTOR);
        let entries = [
            ("verdict_scores", "malicious", v.malicious, score_max),
            ("verdict_scores", "suspicious", v.suspicious, score_max),
            ("verdict_scores", "unknown", v.unknown, score_max),
            ("verdict_scores", "benign", v.benign, score_max),
            ("trust_weights", "high", t.high, factor_max),
            ("trust_weights", "medium", t.medium, factor_max),
            ("trust_weights", "low", t.low, factor_max),
            ("confidence_multipliers", "high", c.high, factor_max),
            ("confidence_multipliers", "medium", c.medium, factor_max),
            ("confidence_multipliers", "low", c.low, factor_max),
        ];

        for (table, key, value, max) in entries {
            if !(0.0..=max).contains(&value) {
                return Err(PolicyError::InvalidTableEntry {
                    table,
                    key,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}
