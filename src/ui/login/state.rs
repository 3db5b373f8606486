//! Login status published by the controller.

use serde::Serialize;

use crate::ui::mvi::UiState;

/// Current progress or result of logging in. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginStatus {
    /// No attempt since the last reset. Also the value before construction
    /// finishes.
    #[default]
    Empty,
    /// Ready and waiting for input.
    Idle,
    /// A credential check is in flight.
    Loading,
    /// Credentials matched.
    Success { message: String },
    /// Credentials did not match.
    Failure { message: String },
}

impl UiState for LoginStatus {}

impl LoginStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once an attempt has resolved, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failure { .. })
    }

    /// The human-readable result message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } | Self::Failure { message } => Some(message),
            Self::Empty | Self::Idle | Self::Loading => None,
        }
    }

    /// Short lowercase name, used in logs and plain-text output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::Failure { .. } => "failure",
        }
    }
}
