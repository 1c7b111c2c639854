use std::future::Future;

use anyhow::{Context, Result};
use cadence_core::CancellationSignal;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopTrigger {
    Enter,
    Interrupt,
}

/// Blocks until the user presses Enter to begin.
pub async fn wait_for_start() -> Result<()> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| ())
    })
    .await
    .context("start prompt task failed")?
    .context("failed to read from standard input")
}

/// Starts the stop listener: the next line on standard input or Ctrl-C,
/// whichever comes first, raises `signal`.
pub fn spawn(signal: CancellationSignal) -> JoinHandle<Option<StopTrigger>> {
    let (enter_sender, enter_receiver) = oneshot::channel();

    // Blocking stdin reads live on a plain thread so the runtime never waits
    // on them at shutdown.
    let reader = std::thread::Builder::new()
        .name("stop-listener".to_string())
        .spawn(move || {
            let mut line = String::new();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) => debug!("standard input closed, only Ctrl-C can stop the timer"),
                Ok(_) => {
                    enter_sender.send(()).ok();
                }
                Err(error) => warn!(%error, "failed to read from standard input"),
            }
        });

    if let Err(error) = reader {
        warn!(%error, "failed to start stdin listener, only Ctrl-C can stop the timer");
    }

    tokio::spawn(async move {
        let interrupt = async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                warn!(%error, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };
        wait_for_stop(signal, enter_receiver, interrupt).await
    })
}

/// Returns the trigger that set the signal, or `None` if another writer had
/// already set it.
pub async fn wait_for_stop(
    signal: CancellationSignal,
    enter: oneshot::Receiver<()>,
    interrupt: impl Future<Output = ()>,
) -> Option<StopTrigger> {
    let trigger = tokio::select! {
        Ok(()) = enter => StopTrigger::Enter,
        () = interrupt => StopTrigger::Interrupt,
    };

    if signal.cancel() {
        info!(?trigger, "stop requested");
        Some(trigger)
    } else {
        None
    }
}
