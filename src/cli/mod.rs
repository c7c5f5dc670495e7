//! Command-line front ends
//! 
//! Both the flag-driven modes and the interactive menu drive the same display loops.

pub mod input;
pub mod menu;

use std::{io, time::Duration};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tracing::debug;

use crate::{
    tasks::{run_countdown, run_stopwatch},
    utils::{Interrupt, Interrupts},
};

// Re-export main functions
pub use input::{parse_seconds, parse_whole_seconds};
pub use menu::{run_menu, MenuChoice};

/// What the program was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Timer(Duration),
    Stopwatch,
    Menu,
}

/// Run a single mode against the given input and output.
///
/// Any interrupt cancels the running countdown or stops the stopwatch.
pub async fn run_mode<R, W>(
    mode: Mode,
    input: &mut R,
    out: &mut W,
    interrupts: &mut Interrupts,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!("Running mode {:?}", mode);
    match mode {
        Mode::Timer(duration) => {
            run_countdown(out, duration, async {
                interrupts.next().await;
            })
            .await?;
        }
        Mode::Stopwatch => {
            run_stopwatch(out, async {
                wait_for_stop(&mut *input, &mut *interrupts).await;
            })
            .await?;
        }
        Mode::Menu => run_menu(input, out, interrupts).await?,
    }
    Ok(())
}

/// Result of waiting for one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineRead {
    Line(String),
    Eof,
    Interrupted(Interrupt),
}

/// Read one trimmed line, unless an interrupt arrives first
pub(crate) async fn next_line<R>(input: &mut R, interrupts: &mut Interrupts) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = String::new();
    let read = tokio::select! {
        biased;
        interrupt = interrupts.next() => return Ok(LineRead::Interrupted(interrupt)),
        read = input.read_line(&mut buf) => read?,
    };

    Ok(match read {
        0 => LineRead::Eof,
        _ => LineRead::Line(buf.trim().to_string()),
    })
}

/// Resolve on Enter, end of input, a read error, or an interrupt.
///
/// Returns the interrupt when that is what stopped the wait.
pub(crate) async fn wait_for_stop<R>(input: &mut R, interrupts: &mut Interrupts) -> Option<Interrupt>
where
    R: AsyncBufRead + Unpin,
{
    match next_line(input, interrupts).await {
        Ok(LineRead::Interrupted(interrupt)) => {
            debug!("Stop requested by {:?}", interrupt);
            Some(interrupt)
        }
        Ok(read) => {
            debug!("Stop requested: {:?}", read);
            None
        }
        Err(e) => {
            debug!("Stopping after input error: {}", e);
            None
        }
    }
}
