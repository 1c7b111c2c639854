//! Cadence core library
//!
//! The Pomodoro session engine: phase cadence, the cancellable countdown and
//! run statistics. Rendering and logging are reached through the ports in
//! [`ports`]; this crate knows nothing about the terminal or log files.

pub mod cancellation;
pub mod config;
pub mod domain;
pub mod ports;
pub mod session;
pub mod testing;
pub mod timer;

pub use cancellation::CancellationSignal;
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig};
pub use domain::{Phase, PhaseKind, RemainingTime, Round, RunStatistics, SessionEvent};
pub use ports::{DisplaySink, EventSink};
pub use session::{PomodoroSession, SessionState};
pub use timer::{Countdown, CountdownOutcome, Ticks};
