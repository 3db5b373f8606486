//! Confirmation step in front of the clear button.
//!
//! Pressing clear only opens a prompt. The fields are cleared and the
//! controller reset only once the prompt is confirmed.

use crate::ui::login::screen::{DialogModel, DIALOG_CONFIRM, DIALOG_TITLE};
use crate::ui::mvi::{Intent, Reducer, UiState};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all the data?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearDialogState {
    #[default]
    Hidden,
    /// Prompt is open, waiting for OK.
    Confirming,
    /// OK was pressed. The owner resets the controller, then dispatches
    /// `ClearIntent::Done`.
    Confirmed,
}

impl UiState for ClearDialogState {}

impl ClearDialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Confirming)
    }

    /// True when the owner should reset the login controller.
    pub fn should_clear(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    pub fn dialog(&self) -> Option<DialogModel> {
        self.is_visible().then(|| DialogModel {
            title: DIALOG_TITLE,
            message: CLEAR_PROMPT.to_string(),
            confirm: DIALOG_CONFIRM,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearIntent {
    /// Clear button pressed.
    Request,
    /// OK pressed on the prompt. Ignored unless the prompt is open.
    Confirm,
    /// Prompt dismissed without confirming.
    Dismiss,
    /// Reset has been carried out.
    Done,
}

impl Intent for ClearIntent {}

pub struct ClearReducer;

impl Reducer for ClearReducer {
    type State = ClearDialogState;
    type Intent = ClearIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ClearIntent::Request => match state {
                // A confirmed clear still has to be carried out.
                ClearDialogState::Confirmed => state,
                _ => ClearDialogState::Confirming,
            },
            ClearIntent::Confirm => match state {
                ClearDialogState::Confirming => ClearDialogState::Confirmed,
                other => other,
            },
            ClearIntent::Dismiss => match state {
                ClearDialogState::Confirming => ClearDialogState::Hidden,
                other => other,
            },
            ClearIntent::Done => ClearDialogState::Hidden,
        }
    }
}
