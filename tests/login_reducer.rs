use stateflow::login::{LoginError, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use stateflow::ui::login::{LoginIntent, LoginReducer, LoginStatus};
use stateflow::ui::mvi::Reducer;

fn all_statuses() -> Vec<LoginStatus> {
    vec![
        LoginStatus::Empty,
        LoginStatus::Idle,
        LoginStatus::Loading,
        LoginStatus::Success {
            message: SUCCESS_MESSAGE.to_string(),
        },
        LoginStatus::Failure {
            message: FAILURE_MESSAGE.to_string(),
        },
    ]
}

#[test]
fn initialize_moves_empty_to_idle() {
    let state = LoginReducer::reduce(LoginStatus::Empty, LoginIntent::Initialize);
    assert_eq!(state, LoginStatus::Idle);
}

#[test]
fn initialize_leaves_other_states_alone() {
    for status in all_statuses().into_iter().skip(1) {
        let state = LoginReducer::reduce(status.clone(), LoginIntent::Initialize);
        assert_eq!(state, status);
    }
}

#[test]
fn submit_always_loads() {
    for status in all_statuses() {
        assert_eq!(
            LoginReducer::reduce(status, LoginIntent::Submit),
            LoginStatus::Loading
        );
    }
}

#[test]
fn reset_always_empties() {
    for status in all_statuses() {
        assert_eq!(
            LoginReducer::reduce(status, LoginIntent::Reset),
            LoginStatus::Empty
        );
    }
}

#[test]
fn resolve_ok_is_success_with_fixed_message() {
    let state = LoginReducer::reduce(
        LoginStatus::Loading,
        LoginIntent::Resolve { outcome: Ok(()) },
    );
    match state {
        LoginStatus::Success { message } => {
            assert_eq!(message, "Success! You have successfully logged in.");
        }
        other => panic!("Expected Success, got {other:?}"),
    }
}

#[test]
fn resolve_mismatch_is_failure_with_fixed_message() {
    let state = LoginReducer::reduce(
        LoginStatus::Loading,
        LoginIntent::Resolve {
            outcome: Err(LoginError::CredentialMismatch),
        },
    );
    match state {
        LoginStatus::Failure { message } => {
            assert_eq!(message, "Login attempt failed. Please try again.");
        }
        other => panic!("Expected Failure, got {other:?}"),
    }
}

#[test]
fn resolve_applies_outside_loading() {
    // The controller decides whether stale resolutions may land.
    let state = LoginReducer::reduce(
        LoginStatus::Empty,
        LoginIntent::Resolve { outcome: Ok(()) },
    );
    assert!(matches!(state, LoginStatus::Success { .. }));
}
