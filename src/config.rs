//! Configuration and CLI argument handling

use std::time::Duration;
use clap::{ArgGroup, Parser};

use crate::cli::{parse_seconds, Mode};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "timer-stopwatch")]
#[command(about = "A command-line countdown timer and stopwatch")]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["timer", "stopwatch", "interactive"])))]
pub struct Config {
    /// Count down from the given number of seconds
    #[arg(short, long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub timer: Option<Duration>,

    /// Start a stopwatch, stopped with Enter or Ctrl+C
    #[arg(short, long)]
    pub stopwatch: bool,

    /// Open the interactive menu
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the selected mode, if any flag picked one
    pub fn mode(&self) -> Option<Mode> {
        if let Some(duration) = self.timer {
            Some(Mode::Timer(duration))
        } else if self.stopwatch {
            Some(Mode::Stopwatch)
        } else if self.interactive {
            Some(Mode::Menu)
        } else {
            None
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
