//! Configuration handlers.

use crate::Config;
use crate::config::PROJECT_CONFIG_FILES;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Handle `--init`: write the configuration template and report where it went.
///
/// `path` is either a directory, which receives `.threat-verdict.yaml`, or the
/// target file itself. Existing files are left untouched.
pub fn handle_init_config(path: &Path) -> ExitCode {
    let target = if path.is_dir() {
        path.join(PROJECT_CONFIG_FILES[0])
    } else {
        path.to_path_buf()
    };

    if target.exists() {
        eprintln!("Error: {} already exists, not overwriting", target.display());
        eprintln!("Pass a different location with --init <PATH>.");
        return ExitCode::from(2);
    }

    if let Err(e) = fs::write(&target, Config::generate_template()) {
        eprintln!("Error: Failed to write {}: {}", target.display(), e);
        return ExitCode::from(2);
    }

    println!("Created configuration file template at {}", target.display());
    println!("Edit provider_trust to rate your providers; omitted table entries keep their defaults.");
    ExitCode::SUCCESS
}
