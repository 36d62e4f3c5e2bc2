use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use threat_verdict::{
    Cli,
    handlers::{handle_init_config, run_normal_mode},
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "threat_verdict=debug"
    } else {
        "threat_verdict=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle config initialization
    if cli.init {
        let target = cli.input.as_deref().unwrap_or(Path::new("."));
        return handle_init_config(target);
    }

    run_normal_mode(&cli)
}
