pub mod json;
pub mod terminal;

use serde::{Deserialize, Serialize};

use crate::types::AggregationResult;

/// Aggregation result together with the indicator it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    #[serde(flatten)]
    pub result: AggregationResult,
}

impl VerdictReport {
    pub fn new(indicator: Option<String>, result: AggregationResult) -> Self {
        Self { indicator, result }
    }
}

pub trait Reporter {
    fn report(&self, report: &VerdictReport) -> String;
}
