use crate::login::LoginError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Screen finished constructing. Moves `Empty` to `Idle`, once.
    Initialize,
    /// Login pressed; the check is now in flight.
    Submit,
    /// The simulated check finished with this outcome.
    Resolve { outcome: Result<(), LoginError> },
    /// Clear pressed or result acknowledged.
    Reset,
}

impl Intent for LoginIntent {}
