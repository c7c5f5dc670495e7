//! Stopwatch display loop

use std::{future::Future, time::Duration};
use tokio::{io::{AsyncWrite, AsyncWriteExt}, time::interval};
use tracing::info;

use crate::{
    state::TimerState,
    utils::format_duration,
};

use super::write_frame;

/// How often the running stopwatch is redrawn
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Run a stopwatch until `stop` resolves and return the elapsed time
pub async fn run_stopwatch<W, F>(out: &mut W, stop: F) -> anyhow::Result<Duration>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    let mut timer = TimerState::new();
    timer.start()?;
    info!("Stopwatch started");

    out.write_all(b"Stopwatch started. Press Enter or Ctrl+C to stop.\n").await?;
    out.flush().await?;

    tokio::pin!(stop);
    let mut refresh = interval(REFRESH_INTERVAL);

    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = refresh.tick() => {
                write_frame(out, &format_duration(timer.elapsed())).await?;
            }
        }
    }

    let elapsed = timer.stop()?;
    info!("Stopwatch stopped after {:?}", elapsed);
    out.write_all(format!("\nElapsed time: {:.2} seconds\n", elapsed.as_secs_f64()).as_bytes())
        .await?;
    out.flush().await?;
    Ok(elapsed)
}
