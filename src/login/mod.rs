//! Login state controller and the credential check it runs.

mod controller;
mod credentials;
mod error;

pub use controller::{AttemptHandle, LoginStateController, StatusSubscription};
pub use credentials::{Authenticator, Credentials, StaticAuthenticator};
pub use error::{LoginError, FAILURE_MESSAGE, SUCCESS_MESSAGE};
