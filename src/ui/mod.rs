pub mod login;
pub mod mvi;
