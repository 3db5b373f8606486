//! Login screen state core: an observable status cell driven by a simulated
//! asynchronous credential check.

pub mod cli;
pub mod config;
pub mod logging;
pub mod login;
pub mod ui;
