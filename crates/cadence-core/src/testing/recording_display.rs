use std::sync::Mutex;

use crate::domain::{PhaseKind, RemainingTime};
use crate::ports::DisplaySink;
use crate::CancellationSignal;

struct CancelTrigger {
    signal: CancellationSignal,
    kind: PhaseKind,
    remaining_seconds: u64,
}

/// Display double that remembers every update and can raise the stop signal
/// when a given remaining time is shown.
pub struct RecordingDisplay {
    ticks: Mutex<Vec<(PhaseKind, RemainingTime)>>,
    started: Mutex<Vec<PhaseKind>>,
    finished: Mutex<Vec<PhaseKind>>,
    trigger: Option<CancelTrigger>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ticks: Mutex::new(Vec::new()),
            started: Mutex::new(Vec::new()),
            finished: Mutex::new(Vec::new()),
            trigger: None,
        }
    }

    /// Cancels `signal` right after `remaining_seconds` is displayed for a
    /// phase of `kind`.
    pub fn cancelling_at(
        signal: CancellationSignal,
        kind: PhaseKind,
        remaining_seconds: u64,
    ) -> Self {
        Self {
            trigger: Some(CancelTrigger {
                signal,
                kind,
                remaining_seconds,
            }),
            ..Self::new()
        }
    }

    pub fn ticks(&self) -> Vec<(PhaseKind, RemainingTime)> {
        self.ticks.lock().unwrap().clone()
    }

    pub fn remaining_seconds_for(&self, kind: PhaseKind) -> Vec<u64> {
        self.ticks
            .lock()
            .unwrap()
            .iter()
            .filter(|(tick_kind, _)| *tick_kind == kind)
            .map(|(_, remaining)| remaining.as_secs())
            .collect()
    }

    pub fn started(&self) -> Vec<PhaseKind> {
        self.started.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<PhaseKind> {
        self.finished.lock().unwrap().clone()
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for RecordingDisplay {
    fn phase_started(&self, kind: PhaseKind) {
        self.started.lock().unwrap().push(kind);
    }

    fn tick(&self, kind: PhaseKind, remaining: RemainingTime) {
        self.ticks.lock().unwrap().push((kind, remaining));

        if let Some(ref trigger) = self.trigger {
            if trigger.kind == kind && trigger.remaining_seconds == remaining.as_secs() {
                trigger.signal.cancel();
            }
        }
    }

    fn phase_finished(&self, kind: PhaseKind) {
        self.finished.lock().unwrap().push(kind);
    }
}
