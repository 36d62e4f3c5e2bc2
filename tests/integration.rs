use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command isolated from any user-level or project configuration.
fn cmd(dir: &Path) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("threat-verdict");
    c.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    c
}

fn write_batch(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("batch.json");
    fs::write(&path, content).unwrap();
    path
}

const MALICIOUS_SINGLE: &str = r#"{
    "indicator": "203.0.113.9",
    "providers": [
        {"provider": "virustotal", "status": "success", "data": {"verdict": "malicious", "confidence": "high"}},
        {"provider": "otx", "status": "timeout"},
        {"provider": "shodan", "status": "error", "message": "HTTP 429"}
    ]
}"#;

const CONFLICTING: &str = r#"[
    {"provider": "virustotal", "status": "success", "data": {"verdict": "malicious", "confidence": "high"}},
    {"provider": "abuseipdb", "status": "success", "data": {"verdict": "benign", "confidence": "high"}}
]"#;

const HIGH_TRUST_CONFIG: &str = r#"
policy:
  provider_trust:
    virustotal: high
    abuseipdb: high
"#;

mod terminal_output {
    use super::*;

    #[test]
    fn test_malicious_single_provider() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".threat-verdict.yaml"), HIGH_TRUST_CONFIG).unwrap();
        let batch = write_batch(dir.path(), MALICIOUS_SINGLE);

        cmd(dir.path())
            .arg(batch)
            .assert()
            .success()
            .stdout(predicate::str::contains("MALICIOUS"))
            .stdout(predicate::str::contains("100/100"))
            .stdout(predicate::str::contains("Single provider"))
            .stdout(predicate::str::contains("203.0.113.9"));
    }

    #[test]
    fn test_verbose_shows_audit_table() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(dir.path(), MALICIOUS_SINGLE);

        cmd(dir.path())
            .arg("--verbose")
            .arg(batch)
            .assert()
            .success()
            .stdout(predicate::str::contains("PROVIDER"))
            .stdout(predicate::str::contains("shodan"))
            .stdout(predicate::str::contains("timeout"));
    }

    #[test]
    fn test_reads_stdin() {
        let dir = TempDir::new().unwrap();

        cmd(dir.path())
            .write_stdin(CONFLICTING)
            .assert()
            .success()
            .stdout(predicate::str::contains("SUSPICIOUS"))
            .stdout(predicate::str::contains("Conflicting signals"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_conflicting_batch() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".threat-verdict.yaml"), HIGH_TRUST_CONFIG).unwrap();
        let batch = write_batch(dir.path(), CONFLICTING);

        let output = cmd(dir.path())
            .args(["--format", "json"])
            .arg(batch)
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["finalScore"], 50);
        assert_eq!(parsed["verdict"], "suspicious");
        assert_eq!(parsed["meta"]["hasConflictingSignals"], true);
        assert_eq!(parsed["processedProviders"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_all_failed() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(
            dir.path(),
            r#"[{"provider": "a", "status": "timeout"}, {"provider": "b", "status": "timeout"}, {"provider": "c", "status": "timeout"}]"#,
        );

        let output = cmd(dir.path())
            .args(["--format", "json"])
            .arg(batch)
            .output()
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(parsed["finalScore"].is_null());
        assert_eq!(parsed["verdict"], "unknown");
        assert_eq!(parsed["meta"]["totalProviders"], 3);
        assert_eq!(parsed["meta"]["timedOutProviders"], 3);
        assert_eq!(parsed["meta"]["successfulProviders"], 0);
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(dir.path(), CONFLICTING);
        let out = dir.path().join("report.json");

        cmd(dir.path())
            .args(["--format", "json", "--output"])
            .arg(&out)
            .arg(batch)
            .assert()
            .success()
            .stdout(predicate::str::contains("Output written to"));

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(parsed["verdict"], "suspicious");
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_fail_on_threshold_met() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(dir.path(), MALICIOUS_SINGLE);

        cmd(dir.path())
            .args(["--fail-on", "suspicious"])
            .arg(batch)
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_fail_on_threshold_not_met() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(dir.path(), CONFLICTING);

        cmd(dir.path())
            .args(["--fail-on", "malicious"])
            .arg(batch)
            .assert()
            .success();
    }

    #[test]
    fn test_invalid_batch() {
        let dir = TempDir::new().unwrap();
        let batch = write_batch(dir.path(), r#"[{"provider": "a", "status": "queued"}]"#);

        cmd(dir.path())
            .arg(batch)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid provider batch"));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();

        cmd(dir.path())
            .arg("does-not-exist.json")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to read input"));
    }

    #[test]
    fn test_invalid_discovered_config_is_not_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".threat-verdict.yaml"),
            "policy:\n  default_trust_level: low\n  provider_trust:\n    virustotal: trusted\n",
        )
        .unwrap();
        let batch = write_batch(dir.path(), MALICIOUS_SINGLE);

        cmd(dir.path())
            .args(["--fail-on", "malicious"])
            .arg(batch)
            .assert()
            .failure()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Configuration error"));
    }

    #[test]
    fn test_out_of_range_table_entry() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tables.yaml");
        fs::write(
            &config,
            "tables:\n  trust_weights:\n    high: 1.0e300\n  confidence_multipliers:\n    high: 1.0e300\n",
        )
        .unwrap();
        let batch = write_batch(dir.path(), MALICIOUS_SINGLE);

        cmd(dir.path())
            .arg("--config")
            .arg(config)
            .arg(batch)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("must be between 0 and 1000"));
    }

    #[test]
    fn test_invalid_trust_level_in_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("policy.yaml");
        fs::write(&config, "policy:\n  provider_trust:\n    virustotal: supreme\n").unwrap();
        let batch = write_batch(dir.path(), CONFLICTING);

        cmd(dir.path())
            .arg("--config")
            .arg(config)
            .arg(batch)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Configuration error"));
    }
}

mod config {
    use super::*;

    #[test]
    fn test_init_writes_template() {
        let dir = TempDir::new().unwrap();

        cmd(dir.path())
            .args(["--init", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created configuration file template"));

        let content = fs::read_to_string(dir.path().join(".threat-verdict.yaml")).unwrap();
        assert!(content.contains("trust_weights"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".threat-verdict.yaml"), "keep me").unwrap();

        cmd(dir.path())
            .args(["--init", "."])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_custom_tables_change_score() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tables.toml");
        fs::write(
            &config,
            "[tables.verdict_scores]\nmalicious = 90\nsuspicious = 60\nunknown = 30\nbenign = 0\n",
        )
        .unwrap();
        let batch = write_batch(
            dir.path(),
            r#"[{"provider": "vt", "status": "success", "data": {"verdict": "malicious", "confidence": "low"}}]"#,
        );

        let output = cmd(dir.path())
            .args(["--format", "json", "--config"])
            .arg(config)
            .arg(batch)
            .output()
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["finalScore"], 90);
        assert_eq!(parsed["verdict"], "malicious");
    }
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fail-on"));
}
