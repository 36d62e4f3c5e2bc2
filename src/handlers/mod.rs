//! CLI command handlers.
//!
//! Kept separate from main.rs so they can be unit tested.

mod aggregate;
mod config;

pub use aggregate::{load_config, render, run_aggregation, run_normal_mode};
pub use config::handle_init_config;
