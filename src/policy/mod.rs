//! Trust policy and scoring tables supplied to the aggregation engine.

pub mod error;
pub mod tables;
pub mod trust;

pub use error::PolicyError;
pub use tables::{ConfidenceMultipliers, ScoringTables, TrustWeights, VerdictScores};
pub use trust::TrustPolicy;
