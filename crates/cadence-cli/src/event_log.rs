use cadence_core::{EventSink, PhaseKind, SessionEvent};
use tracing::info;

/// Writes session events into the log through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn emit(&self, event: &SessionEvent) {
        match event {
            SessionEvent::SessionStarted => {
                info!(target: "cadence::events", "========== New Cadence Session Started ==========");
                info!(target: "cadence::events", "Cadence application started");
            }
            SessionEvent::PhaseStarted { kind } => match kind {
                PhaseKind::Work => info!(target: "cadence::events", "Work session started"),
                PhaseKind::ShortBreak => info!(target: "cadence::events", "Break session started"),
                PhaseKind::LongBreak => {
                    info!(target: "cadence::events", "Long break session started")
                }
            },
            SessionEvent::PhaseCompleted {
                kind,
                elapsed_minutes,
            } => match kind {
                PhaseKind::Work => info!(
                    target: "cadence::events",
                    "Work session completed - Duration: {elapsed_minutes:.2} minutes"
                ),
                PhaseKind::ShortBreak => info!(
                    target: "cadence::events",
                    "Break session completed - Duration: {elapsed_minutes:.2} minutes"
                ),
                PhaseKind::LongBreak => info!(
                    target: "cadence::events",
                    "Long break completed - Duration: {elapsed_minutes:.2} minutes"
                ),
            },
            SessionEvent::StopRequested => {
                info!(target: "cadence::events", "Session ended by user");
            }
            SessionEvent::Summary {
                completed_cycles,
                work_minutes,
                break_minutes,
            } => {
                info!(target: "cadence::events", "======= Session Summary =======");
                info!(target: "cadence::events", "Work cycles completed: {completed_cycles}");
                info!(target: "cadence::events", "Total work time (minutes): {work_minutes:.2}");
                info!(target: "cadence::events", "Total break time (minutes): {break_minutes:.2}");
            }
        }
    }
}
