//! Credential values and the check performed once the simulated delay ends.

use std::fmt;

use super::error::LoginError;

const REDACTED: &str = "****";

/// The two text-field values submitted with a login attempt.
///
/// No trimming or validation is applied; empty strings are carried as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Decides whether submitted credentials are accepted.
///
/// Called from the attempt task after the delay, so implementations must be
/// cheap and must not block.
pub trait Authenticator: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

/// Accepts exactly one hardcoded credential pair.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    expected: Credentials,
}

impl StaticAuthenticator {
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD: &'static str = "password";
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self {
            expected: Credentials::new(Self::USERNAME, Self::PASSWORD),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, credentials: &Credentials) -> Result<(), LoginError> {
        // Both fields, case-sensitive, byte-for-byte.
        if credentials.username == self.expected.username
            && credentials.password == self.expected.password
        {
            Ok(())
        } else {
            Err(LoginError::CredentialMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify(username: &str, password: &str) -> Result<(), LoginError> {
        StaticAuthenticator::default().verify(&Credentials::new(username, password))
    }

    #[test]
    fn exact_pair_is_accepted() {
        assert_eq!(verify("username", "password"), Ok(()));
    }

    #[test]
    fn any_other_pair_is_rejected() {
        for (username, password) in [
            ("wrong", "wrong"),
            ("username", "wrong"),
            ("wrong", "password"),
            ("Username", "password"),
            ("username", "PASSWORD"),
            (" username", "password"),
            ("username", "password "),
            ("", ""),
            ("username", ""),
            ("", "password"),
        ] {
            assert_eq!(
                verify(username, password),
                Err(LoginError::CredentialMismatch),
                "{username:?}/{password:?} should be rejected"
            );
        }
    }

    #[test]
    fn debug_output_masks_password() {
        let rendered = format!("{:?}", Credentials::new("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }
}
