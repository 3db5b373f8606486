use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub login: LoginConfig,
}

/// Settings for the login state controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Simulated network delay before an attempt resolves (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// How overlapping attempts interact (default: supersede).
    #[serde(default)]
    pub policy: AttemptPolicy,
}

/// What happens to a pending attempt when a newer attempt or a reset arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttemptPolicy {
    /// Abort the pending attempt. Only the newest attempt can resolve, and a
    /// reset is never overwritten by an older attempt.
    #[default]
    Supersede,
    /// Attempts run independently; whichever finishes last sets the status.
    LastWriteWins,
}

impl AttemptPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supersede => "supersede",
            Self::LastWriteWins => "last_write_wins",
        }
    }
}

pub const MAX_DELAY_MS: u64 = 60_000;

fn default_delay_ms() -> u64 {
    1000
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            policy: AttemptPolicy::default(),
        }
    }
}

impl LoginConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
