//! Configuration layer for threat-verdict.
//!
//! - `types`: Configuration type definitions
//! - `loading`: File loading and discovery
//! - `template`: Commented YAML template for `--init`

mod error;
mod loading;
mod template;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::Config;
