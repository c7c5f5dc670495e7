//! Error types for timer transitions and user input

use thiserror::Error;

/// Invalid `TimerState` transitions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("Timer is already running.")]
    AlreadyRunning,

    #[error("Timer is not running.")]
    NotRunning,
}

/// Rejected duration input from the command line or the menu prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no value entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is negative")]
    Negative(String),

    #[error("'{0}' is too large")]
    TooLarge(String),

    #[error("'{0}' is not a menu option")]
    UnknownChoice(String),
}
