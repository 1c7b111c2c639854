use std::sync::Mutex;

use crate::domain::{PhaseKind, SessionEvent};
use crate::ports::EventSink;
use crate::CancellationSignal;

struct CancelTrigger {
    signal: CancellationSignal,
    event: SessionEvent,
    occurrence: usize,
}

/// Event sink double that keeps every event and can raise the stop signal
/// when a chosen event is emitted for the n-th time.
pub struct RecordingEventSink {
    events: Mutex<Vec<SessionEvent>>,
    trigger: Option<CancelTrigger>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            trigger: None,
        }
    }

    pub fn cancelling_on(signal: CancellationSignal, event: SessionEvent) -> Self {
        Self::cancelling_on_occurrence(signal, event, 1)
    }

    pub fn cancelling_on_occurrence(
        signal: CancellationSignal,
        event: SessionEvent,
        occurrence: usize,
    ) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            trigger: Some(CancelTrigger {
                signal,
                event,
                occurrence,
            }),
        }
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(SessionEvent::name)
            .collect()
    }

    pub fn started_kinds(&self) -> Vec<PhaseKind> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::PhaseStarted { kind } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.names().into_iter().filter(|n| *n == name).count()
    }
}

impl Default for RecordingEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &SessionEvent) {
        let mut events = self.events.lock().unwrap();
        events.push(event.clone());

        if let Some(ref trigger) = self.trigger {
            let seen = events.iter().filter(|e| **e == trigger.event).count();
            if seen == trigger.occurrence {
                trigger.signal.cancel();
            }
        }
    }
}
