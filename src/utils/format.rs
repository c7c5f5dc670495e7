//! Clock formatting for the in-place display

use std::time::Duration;

/// Format whole seconds as zero-padded `MM:SS`
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format a duration as `MM:SS`, dropping the sub-second part
pub fn format_duration(duration: Duration) -> String {
    format_clock(duration.as_secs())
}
