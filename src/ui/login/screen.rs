//! What the login screen shows for a given status.
//!
//! This is a projection only. Drawing the progress bar, the snackbar and the
//! dialog is left to whichever frontend subscribes to the controller.

use crate::ui::login::state::LoginStatus;

pub const LOADING_NOTIFICATION: &str = "Loading State";
pub const DIALOG_TITLE: &str = "Login Dialog";
pub const DIALOG_CONFIRM: &str = "OK";

/// Modal acknowledgement shown once an attempt resolves.
///
/// Confirming it is expected to call
/// [`LoginStateController::acknowledge`](crate::login::LoginStateController::acknowledge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogModel {
    pub title: &'static str,
    pub message: String,
    pub confirm: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenModel {
    /// Progress indicator visibility.
    pub progress_visible: bool,
    /// Transient notification text (snackbar).
    pub notification: Option<&'static str>,
    pub dialog: Option<DialogModel>,
    /// Input fields should be cleared.
    pub clear_fields: bool,
}

impl ScreenModel {
    pub fn from_status(status: &LoginStatus) -> Self {
        match status {
            LoginStatus::Loading => Self {
                progress_visible: true,
                notification: Some(LOADING_NOTIFICATION),
                ..Self::default()
            },
            LoginStatus::Success { message } | LoginStatus::Failure { message } => Self {
                dialog: Some(DialogModel {
                    title: DIALOG_TITLE,
                    message: message.clone(),
                    confirm: DIALOG_CONFIRM,
                }),
                ..Self::default()
            },
            LoginStatus::Empty => Self {
                clear_fields: true,
                ..Self::default()
            },
            LoginStatus::Idle => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_shows_progress_and_notification() {
        let model = ScreenModel::from_status(&LoginStatus::Loading);
        assert!(model.progress_visible);
        assert_eq!(model.notification, Some(LOADING_NOTIFICATION));
        assert!(model.dialog.is_none());
        assert!(!model.clear_fields);
    }

    #[test]
    fn results_open_dialog_and_hide_progress() {
        for status in [
            LoginStatus::Success { message: "yes".into() },
            LoginStatus::Failure { message: "no".into() },
        ] {
            let model = ScreenModel::from_status(&status);
            assert!(!model.progress_visible);
            let dialog = model.dialog.expect("dialog for resolved status");
            assert_eq!(dialog.title, DIALOG_TITLE);
            assert_eq!(Some(dialog.message.as_str()), status.message());
            assert_eq!(dialog.confirm, DIALOG_CONFIRM);
        }
    }

    #[test]
    fn empty_clears_fields() {
        let model = ScreenModel::from_status(&LoginStatus::Empty);
        assert!(model.clear_fields);
        assert!(!model.progress_visible);
        assert!(model.dialog.is_none());
    }

    #[test]
    fn idle_shows_nothing() {
        assert_eq!(ScreenModel::from_status(&LoginStatus::Idle), ScreenModel::default());
    }
}
