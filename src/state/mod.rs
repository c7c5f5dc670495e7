//! State management module
//! 
//! This module contains the timing state machines driven by the display loops.

pub mod timer_state;
pub mod countdown_state;

// Re-export main types
pub use timer_state::TimerState;
pub use countdown_state::CountdownState;
