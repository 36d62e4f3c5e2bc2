//! Aggregation mode handler.

use crate::error::{Result, VerdictError};
use crate::reporter::{Reporter, VerdictReport, json::JsonReporter, terminal::TerminalReporter};
use crate::{Cli, Config, LookupBatch, OutputFormat};
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

/// Resolve configuration from `--config` or discovery. Any configuration
/// file that is found must load; defaults apply only when there is none.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::from_file(path)?),
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load(cwd.as_deref())?)
        }
    }
}

/// Read the batch, score it and wrap the result for reporting.
pub fn run_aggregation(cli: &Cli) -> Result<VerdictReport> {
    let config = load_config(cli)?;
    let engine = config.engine()?;

    let batch = match &cli.input {
        Some(path) if !cli.reads_stdin() => LookupBatch::from_file(path)?,
        _ => LookupBatch::from_reader(std::io::stdin().lock())?,
    };

    info!(
        indicator = batch.indicator.as_deref().unwrap_or("-"),
        providers = batch.providers.len(),
        "Aggregating provider verdicts"
    );
    let result = engine.compute_score(&batch.providers, &config.policy);
    Ok(VerdictReport::new(batch.indicator, result))
}

pub fn render(cli: &Cli, report: &VerdictReport) -> String {
    match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(report),
        OutputFormat::Json => JsonReporter::new().report(report),
    }
}

/// Run normal mode: aggregate, print or write the report, map the verdict to an exit code.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    let report = match run_aggregation(cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let output = render(cli, &report);

    if let Some(ref output_path) = cli.output {
        if let Err(e) = fs::write(output_path, &output) {
            let err = VerdictError::WriteOutput {
                path: output_path.display().to_string(),
                source: e,
            };
            eprintln!("Error: {}", err);
            return ExitCode::from(2);
        }
        println!("Output written to {}", output_path.display());
    } else {
        println!("{}", output);
    }

    debug!(
        verdict = %report.result.verdict,
        final_score = ?report.result.final_score,
        "Aggregation completed"
    );

    exit_code_for(cli, &report)
}

fn exit_code_for(cli: &Cli, report: &VerdictReport) -> ExitCode {
    match cli.fail_on {
        Some(threshold) if report.result.verdict >= threshold => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    }
}
