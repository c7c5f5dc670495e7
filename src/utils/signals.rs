//! Signal handling for interrupting the display loops

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What an interrupt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Ctrl+C: cancel whatever is being waited on
    Cancel,
    /// SIGTERM: end the run
    Terminate,
}

impl Interrupt {
    fn from_signal(signal: i32) -> Self {
        if signal == SIGTERM {
            Interrupt::Terminate
        } else {
            Interrupt::Cancel
        }
    }
}

/// Queue of interrupts, shared by every wait for the whole run.
///
/// Interrupts that arrive while nothing is waiting stay queued for the next wait.
#[derive(Debug)]
pub struct Interrupts {
    rx: mpsc::UnboundedReceiver<Interrupt>,
}

impl Interrupts {
    /// Create a queue fed by the returned sender
    pub fn channel() -> (mpsc::UnboundedSender<Interrupt>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Install SIGINT/SIGTERM handlers once and feed them into a queue.
    ///
    /// Must be called inside a tokio runtime. If the handlers cannot be
    /// installed the queue never fires, leaving Enter (or the end of input)
    /// as the only way to stop.
    pub fn listen() -> Self {
        let (tx, interrupts) = Self::channel();
        match Signals::new(&[SIGINT, SIGTERM]) {
            Ok(signals) => {
                tokio::spawn(forward_signals(signals, tx));
            }
            Err(e) => warn!("Failed to create signal handler: {}", e),
        }
        interrupts
    }

    /// Wait for the next interrupt; never resolves once every sender is gone
    pub async fn next(&mut self) -> Interrupt {
        match self.rx.recv().await {
            Some(interrupt) => interrupt,
            None => futures::future::pending().await,
        }
    }
}

async fn forward_signals(mut signals: Signals, tx: mpsc::UnboundedSender<Interrupt>) {
    while let Some(signal) = signals.next().await {
        debug!("Received signal: {}", signal);
        if tx.send(Interrupt::from_signal(signal)).is_err() {
            break;
        }
    }
}
