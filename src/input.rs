//! Lookup batch documents produced by the provider executor.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::error::{Result, VerdictError};
use crate::types::ProviderOutcome;

/// Completed provider executions for one indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupBatch {
    /// Indicator the providers were asked about (IP, domain, hash, URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    pub providers: Vec<ProviderOutcome>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BatchDocument {
    Batch(LookupBatch),
    Outcomes(Vec<ProviderOutcome>),
}

impl LookupBatch {
    pub fn new(indicator: Option<String>, providers: Vec<ProviderOutcome>) -> Self {
        Self {
            indicator,
            providers,
        }
    }

    /// Parse a batch from JSON. Accepts either an object with a `providers`
    /// array or a bare array of outcomes.
    pub fn from_json(content: &str) -> Result<Self> {
        let batch = match serde_json::from_str::<BatchDocument>(content) {
            Ok(BatchDocument::Batch(batch)) => batch,
            Ok(BatchDocument::Outcomes(providers)) => Self::new(None, providers),
            // Untagged errors are opaque; reparse with the concrete shape to surface the cause.
            Err(_) if content.trim_start().starts_with('[') => Self::new(
                None,
                serde_json::from_str(content).map_err(VerdictError::InvalidBatch)?,
            ),
            Err(_) => serde_json::from_str::<LookupBatch>(content)
                .map_err(VerdictError::InvalidBatch)?,
        };
        batch.warn_on_duplicates();
        Ok(batch)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| VerdictError::ReadInput {
                path: "<stdin>".to_string(),
                source: e,
            })?;
        Self::from_json(&content)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VerdictError::ReadInput {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Provider identifiers that occur more than once, in first-seen order.
    pub fn duplicate_providers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for outcome in &self.providers {
            let name = outcome.provider.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    fn warn_on_duplicates(&self) {
        for provider in self.duplicate_providers() {
            warn!(provider, "Provider appears more than once in batch");
        }
    }
}
