//! Configuration: TOML file with serde defaults, overridable from the CLI.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AttemptPolicy, Config, LoginConfig, MAX_DELAY_MS};
