//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use stateflow::config::{AttemptPolicy, LoginConfig};
use stateflow::login::LoginStateController;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DELAY_MS: u64 = 1000;

pub fn controller(policy: AttemptPolicy) -> LoginStateController {
    LoginStateController::new(LoginConfig {
        delay_ms: DELAY_MS,
        policy,
    })
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let mut file = std::fs::File::create(&config_path).expect("Failed to create config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config file");
    (temp_dir, config_path)
}
