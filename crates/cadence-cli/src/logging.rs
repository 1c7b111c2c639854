use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Target carrying the session events; always written at INFO.
const EVENTS_DIRECTIVE: &str = "cadence::events=info";

/// Sends every `tracing` record to the append-only session log.
///
/// A non-empty `RUST_LOG` replaces the configured level.
pub fn init(log_path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(rust_log.as_deref(), level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

fn filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    let filter = match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {}: {directives}", EnvFilter::DEFAULT_ENV))?,
        None => EnvFilter::try_new(format!("cadence={level}"))
            .with_context(|| format!("invalid log level: {level}"))?,
    };

    let events: Directive = EVENTS_DIRECTIVE
        .parse()
        .with_context(|| format!("invalid directive: {EVENTS_DIRECTIVE}"))?;
    Ok(filter.add_directive(events))
}
