use crate::login::SUCCESS_MESSAGE;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginStatus;
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginStatus;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Initialize => match state {
                LoginStatus::Empty => LoginStatus::Idle,
                other => other,
            },
            LoginIntent::Submit => LoginStatus::Loading,
            // Applied from any state: whether a stale resolution may land is
            // the controller's policy decision, not the reducer's.
            LoginIntent::Resolve { outcome } => match outcome {
                Ok(()) => LoginStatus::Success {
                    message: SUCCESS_MESSAGE.to_string(),
                },
                Err(err) => LoginStatus::Failure {
                    message: err.to_string(),
                },
            },
            LoginIntent::Reset => LoginStatus::Empty,
        }
    }
}
