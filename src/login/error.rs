use thiserror::Error;

/// Fixed text shown when both credential fields match.
pub const SUCCESS_MESSAGE: &str = "Success! You have successfully logged in.";

/// Fixed text shown for any mismatch, including empty fields.
pub const FAILURE_MESSAGE: &str = "Login attempt failed. Please try again.";

/// Reasons a login attempt can fail.
///
/// These never escape the controller as `Err`; they are folded into
/// [`LoginStatus::Failure`](crate::ui::login::LoginStatus::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("{}", FAILURE_MESSAGE)]
    CredentialMismatch,
}
