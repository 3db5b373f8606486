mod clear;
mod intent;
mod reducer;
mod screen;
mod state;

pub use clear::{ClearDialogState, ClearIntent, ClearReducer, CLEAR_PROMPT};
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use screen::{DialogModel, ScreenModel, DIALOG_CONFIRM, DIALOG_TITLE, LOADING_NOTIFICATION};
pub use state::LoginStatus;
