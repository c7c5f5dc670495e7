//! Interactive menu front end

use std::{str::FromStr, time::Duration};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    error::InputError,
    tasks::{run_countdown, run_stopwatch},
    utils::{Interrupt, Interrupts},
};

use super::{input::parse_whole_seconds, next_line, wait_for_stop, LineRead};

const MENU: &str = "Select an option:\n1. Timer\n2. Stopwatch\n3. Quit\nEnter your choice: ";

/// Menu entries, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Timer,
    Stopwatch,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Timer),
            "2" => Ok(Self::Stopwatch),
            "3" => Ok(Self::Quit),
            other => Err(InputError::UnknownChoice(other.to_string())),
        }
    }
}

/// Run the menu until the user quits, input ends, or an interrupt arrives at the prompt.
///
/// Ctrl+C cancels the running countdown or stopwatch and returns to the menu;
/// a termination request ends the menu from any wait.
pub async fn run_menu<R, W>(input: &mut R, out: &mut W, interrupts: &mut Interrupts) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    out.write_all(b"Welcome to the Timer and Stopwatch App!\n").await?;

    loop {
        out.write_all(MENU.as_bytes()).await?;
        out.flush().await?;

        let line = match next_line(input, interrupts).await? {
            LineRead::Line(line) => line,
            LineRead::Eof | LineRead::Interrupted(_) => break,
        };

        let interrupted = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Timer) => {
                let secs = match prompt_seconds(input, out, interrupts).await? {
                    Prompt::Seconds(secs) => secs,
                    Prompt::Back => continue,
                    Prompt::Quit => break,
                };

                let mut interrupted = None;
                run_countdown(out, Duration::from_secs(secs), async {
                    interrupted = Some(interrupts.next().await);
                })
                .await?;
                interrupted
            }
            Ok(MenuChoice::Stopwatch) => {
                let mut interrupted = None;
                run_stopwatch(out, async {
                    interrupted = wait_for_stop(&mut *input, &mut *interrupts).await;
                })
                .await?;
                interrupted
            }
            Ok(MenuChoice::Quit) => break,
            Err(e) => {
                debug!("Rejected menu input: {}", e);
                out.write_all(b"Invalid choice. Please select a valid option.\n").await?;
                None
            }
        };

        if interrupted == Some(Interrupt::Terminate) {
            info!("Termination requested, leaving the menu");
            break;
        }
    }

    out.write_all(b"Exiting the application. Goodbye!\n").await?;
    out.flush().await?;
    Ok(())
}

enum Prompt {
    Seconds(u64),
    Back,
    Quit,
}

/// Ask for a countdown length until a valid one is entered
async fn prompt_seconds<R, W>(input: &mut R, out: &mut W, interrupts: &mut Interrupts) -> anyhow::Result<Prompt>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        out.write_all(b"Enter the number of seconds for the timer: ").await?;
        out.flush().await?;

        match next_line(input, interrupts).await? {
            LineRead::Line(line) => match parse_whole_seconds(&line) {
                Ok(secs) => return Ok(Prompt::Seconds(secs)),
                Err(e) => {
                    out.write_all(
                        format!("Invalid input: {}. Please enter a non-negative whole number of seconds.\n", e)
                            .as_bytes(),
                    )
                    .await?;
                }
            },
            LineRead::Interrupted(Interrupt::Cancel) => {
                out.write_all(b"\n").await?;
                return Ok(Prompt::Back);
            }
            LineRead::Interrupted(Interrupt::Terminate) | LineRead::Eof => return Ok(Prompt::Quit),
        }
    }
}
