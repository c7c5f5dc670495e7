//! Timer Stopwatch - a command-line countdown timer and stopwatch
//! 
//! This library provides the accumulating timer state machine, the display
//! loops built on it, and the flag-driven and menu-driven front ends.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod cli;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{InputError, TimerError};
pub use state::{CountdownState, TimerState};
pub use cli::{run_mode, Mode};
pub use utils::signals::{Interrupt, Interrupts};
