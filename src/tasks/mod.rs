//! Display loops module
//! 
//! This module contains the loops that drive the timing state and redraw the terminal.

pub mod countdown;
pub mod stopwatch;

use tokio::io::{AsyncWrite, AsyncWriteExt};

// Re-export main functions
pub use countdown::{run_countdown, CountdownOutcome};
pub use stopwatch::run_stopwatch;

/// Redraw the current line with `text`
async fn write_frame<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(format!("\r{}", text).as_bytes()).await?;
    out.flush().await
}
