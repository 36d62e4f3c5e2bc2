//! Configuration template generation.

use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# threat-verdict Configuration File
# Place this file as .threat-verdict.yaml in the directory you run from

# =============================================================================
# TRUST POLICY
# =============================================================================
# Operator-assigned reliability per provider: low, medium, high.
# Providers not listed use default_trust_level.
policy:
  default_trust_level: medium
  provider_trust: {}
  # provider_trust:
  #   virustotal: high
  #   abuseipdb: high
  #   otx: medium

# =============================================================================
# SCORING TABLES
# =============================================================================
# Verdict scores range over 0-100, weights and multipliers over 0-1000.
# Omitted entries keep the defaults.
tables:
  # Position of each provider verdict on the 0-100 risk scale
  verdict_scores:
    malicious: 100
    suspicious: 60
    unknown: 30
    benign: 0

  # Weight per trust level
  trust_weights:
    high: 1.0
    medium: 0.7
    low: 0.5

  # Multiplier per provider-reported confidence
  confidence_multipliers:
    high: 1.0
    medium: 0.75
    low: 0.5
"#
        .to_string()
    }
}
