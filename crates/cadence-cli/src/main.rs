mod banner;
mod event_log;
mod listener;
mod logging;
mod summary;
mod terminal;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use cadence_core::{CancellationSignal, Config, PomodoroSession};
use clap::Parser;
use event_log::TracingEventSink;
use terminal::TerminalDisplay;
use tracing::warn;

#[derive(Parser)]
#[command(name = "cadence", version)]
#[command(about = "Cadence - Pomodoro timer for the terminal", long_about = None)]
struct Cli {
    /// Append the session log to this file instead of the default location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not print the title and phase banners
    #[arg(long)]
    no_banner: bool,

    /// Print banners without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Start the first work phase without waiting for Enter
    #[arg(long)]
    skip_prompt: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error)),
    };

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config.logging.log_file_path());
    logging::init(&log_path, &config.logging.level)?;

    if let Some(error) = config_error {
        warn!(%error, "failed to load config, using defaults");
    }

    let banners = config.display.banner && !cli.no_banner;
    let color = config.display.color && !cli.no_color;

    if banners {
        print!("{}", banner::title(color));
    }

    if !cli.skip_prompt {
        println!("Press Enter to start the Pomodoro timer. Press Enter again at any time to stop.");
        listener::wait_for_start().await?;
    }

    let signal = CancellationSignal::new();
    let _listener = listener::spawn(signal.clone());

    let display = Arc::new(TerminalDisplay::stdout(banners));
    let events = Arc::new(TracingEventSink::new());
    let statistics = PomodoroSession::new(display, events, signal).run().await;

    summary::print(&statistics, cli.json)?;
    if !cli.json {
        println!("Session log: {}", log_path.display());
    }

    Ok(())
}
