use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::types::FinalVerdict;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "threat-verdict",
    version,
    about = "Aggregate threat-intelligence provider verdicts into one risk score",
    long_about = "threat-verdict reads the completed provider results for an indicator and combines them, weighted by operator trust and provider confidence, into a final score and verdict with a per-provider audit trail."
)]
pub struct Cli {
    /// Provider batch as JSON (file path, or '-' / omitted for stdin)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Configuration file (trust policy and scoring tables)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the verdict is at least this severe
    #[arg(long, value_enum)]
    pub fail_on: Option<FinalVerdict>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a configuration template to .threat-verdict.yaml and exit
    #[arg(long)]
    pub init: bool,

    /// Verbose output (per-provider audit table, debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// True when the batch should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}
