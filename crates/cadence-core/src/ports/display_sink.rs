use crate::domain::{PhaseKind, RemainingTime};

/// Receives the countdown as it runs. Rendering failures stay inside the
/// implementation; the countdown never waits on or retries a sink.
pub trait DisplaySink: Send + Sync {
    fn phase_started(&self, _kind: PhaseKind) {}

    fn tick(&self, kind: PhaseKind, remaining: RemainingTime);

    fn phase_finished(&self, _kind: PhaseKind) {}
}
