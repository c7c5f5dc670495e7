//! Countdown display loop

use std::{future::Future, time::Duration};
use tokio::{io::{AsyncWrite, AsyncWriteExt}, time::sleep};
use tracing::info;

use crate::{
    state::CountdownState,
    utils::format_clock,
};

use super::write_frame;

/// How a countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Finished,
    Cancelled { remaining: Duration },
}

/// Count down `duration`, redrawing `MM:SS` in place once per second.
///
/// Resolving `cancel` ends the countdown early.
pub async fn run_countdown<W, F>(
    out: &mut W,
    duration: Duration,
    cancel: F,
) -> anyhow::Result<CountdownOutcome>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    let mut countdown = CountdownState::new(duration);
    info!("Starting countdown for {:?}", countdown.duration());
    out.write_all(
        format!("Timer set for {} seconds...\n", countdown.duration().as_secs_f64()).as_bytes(),
    )
    .await?;
    countdown.start()?;
    tokio::pin!(cancel);

    loop {
        let secs = countdown.remaining_whole_secs();
        if secs == 0 {
            break;
        }
        write_frame(out, &format_clock(secs)).await?;

        // Sleep until the displayed second rolls over
        let until_next = countdown.remaining().saturating_sub(Duration::from_secs(secs - 1));

        tokio::select! {
            biased;
            _ = &mut cancel => {
                countdown.cancel();
                let remaining = countdown.remaining();
                info!("Countdown cancelled with {:?} remaining", remaining);
                out.write_all(b"\nTimer cancelled.\n").await?;
                out.flush().await?;
                return Ok(CountdownOutcome::Cancelled { remaining });
            }
            _ = sleep(until_next) => {}
        }
    }

    info!("Countdown finished");
    out.write_all(format!("\r{} - Time is up\n", format_clock(0)).as_bytes()).await?;
    out.flush().await?;
    Ok(CountdownOutcome::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{pending, ready};
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn ticks_every_second_then_reports_time_up() {
        let mut out = Vec::new();
        let started = Instant::now();

        let outcome = run_countdown(&mut out, Duration::from_secs(3), pending()).await.unwrap();

        assert_eq!(outcome, CountdownOutcome::Finished);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Timer set for 3 seconds...\n\r00:03\r00:02\r00:01\r00:00 - Time is up\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fractional_duration_shows_rounded_up_seconds() {
        let mut out = Vec::new();
        let started = Instant::now();

        run_countdown(&mut out, Duration::from_millis(1500), pending()).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(1500));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Timer set for 1.5 seconds...\n\r00:02\r00:01\r00:00 - Time is up\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_finishes_immediately() {
        let mut out = Vec::new();
        let outcome = run_countdown(&mut out, Duration::ZERO, pending()).await.unwrap();

        assert_eq!(outcome, CountdownOutcome::Finished);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Timer set for 0 seconds...\n\r00:00 - Time is up\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_early() {
        let mut out = Vec::new();
        let cancel = sleep(Duration::from_millis(2500));

        let outcome = run_countdown(&mut out, Duration::from_secs(60), cancel).await.unwrap();

        assert_eq!(
            outcome,
            CountdownOutcome::Cancelled { remaining: Duration::from_millis(57_500) }
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\r00:58\nTimer cancelled.\n"));
        assert!(!text.contains("Time is up"));
    }

    #[tokio::test(start_paused = true)]
    async fn ready_cancel_wins_over_first_tick() {
        let mut out = Vec::new();
        let outcome = run_countdown(&mut out, Duration::from_secs(5), ready(())).await.unwrap();

        assert_eq!(outcome, CountdownOutcome::Cancelled { remaining: Duration::from_secs(5) });
    }
}
