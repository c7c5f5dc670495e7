//! Timer Stopwatch - a command-line countdown timer and stopwatch
//! 
//! This is the main entry point for the timer-stopwatch application.

use tokio::io::BufReader;
use tracing::{debug, info};

use timer_stopwatch::{config::Config, run_mode, Interrupts};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the in-place display on stdout stays intact
    tracing_subscriber::fmt()
        .with_env_filter(format!("timer_stopwatch={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting timer-stopwatch v{}", env!("CARGO_PKG_VERSION"));

    let Some(mode) = config.mode() else {
        eprintln!("No action specified. Use -t, -s or -i.");
        std::process::exit(1);
    };
    debug!("Configuration: {:?}", config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let mut input = BufReader::new(tokio::io::stdin());
        let mut output = tokio::io::stdout();
        let mut interrupts = Interrupts::listen();
        run_mode(mode, &mut input, &mut output, &mut interrupts).await
    });

    // A pending stdin read would otherwise hold shutdown until the next newline
    runtime.shutdown_background();

    info!("Shutdown complete");
    result
}
