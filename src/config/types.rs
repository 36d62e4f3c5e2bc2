//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::policy::{PolicyError, ScoringTables, TrustPolicy};
use crate::scoring::AggregationEngine;

/// Main configuration structure for threat-verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider trust levels.
    pub policy: TrustPolicy,
    /// Normalization and weighting tables.
    pub tables: ScoringTables,
}

impl Config {
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.tables.validate()
    }

    /// Build an engine from the configured tables.
    pub fn engine(&self) -> Result<AggregationEngine, PolicyError> {
        AggregationEngine::new(self.tables)
    }
}
