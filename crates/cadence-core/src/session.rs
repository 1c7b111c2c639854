use std::sync::Arc;

use tracing::debug;

use crate::domain::{Phase, PhaseKind, Round, RunStatistics, SessionEvent};
use crate::ports::{DisplaySink, EventSink};
use crate::timer::{Countdown, CountdownOutcome};
use crate::CancellationSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Work,
    ShortBreak,
    LongBreak,
    Stopped,
}

impl SessionState {
    pub fn phase_kind(&self) -> Option<PhaseKind> {
        match self {
            SessionState::Work => Some(PhaseKind::Work),
            SessionState::ShortBreak => Some(PhaseKind::ShortBreak),
            SessionState::LongBreak => Some(PhaseKind::LongBreak),
            SessionState::Stopped => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Stopped)
    }
}

impl From<PhaseKind> for SessionState {
    fn from(kind: PhaseKind) -> Self {
        match kind {
            PhaseKind::Work => SessionState::Work,
            PhaseKind::ShortBreak => SessionState::ShortBreak,
            PhaseKind::LongBreak => SessionState::LongBreak,
        }
    }
}

/// Drives the work / short break / long break cadence until the stop signal
/// is raised.
///
/// The stop signal is checked before each phase and on every countdown tick.
/// Whatever was elapsed in the interrupted phase is still recorded before the
/// session moves to [`SessionState::Stopped`].
pub struct PomodoroSession {
    countdown: Countdown,
    display: Arc<dyn DisplaySink>,
    events: Arc<dyn EventSink>,
    signal: CancellationSignal,
    state: SessionState,
    round: Round,
    statistics: RunStatistics,
}

impl PomodoroSession {
    pub fn new(
        display: Arc<dyn DisplaySink>,
        events: Arc<dyn EventSink>,
        signal: CancellationSignal,
    ) -> Self {
        Self {
            countdown: Countdown::new(display.clone(), signal.clone()),
            display,
            events,
            signal,
            state: SessionState::Work,
            round: Round::first(),
            statistics: RunStatistics::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Runs phases until stopped, then emits the stop marker and the summary
    /// and hands back the final statistics.
    pub async fn run(mut self) -> RunStatistics {
        debug!("pomodoro session started");
        self.events.emit(&SessionEvent::SessionStarted);

        while !self.state.is_terminal() {
            self.step().await;
        }

        self.finish()
    }

    /// Runs the phase of the current state and moves to the next state.
    pub async fn step(&mut self) -> SessionState {
        let Some(kind) = self.state.phase_kind() else {
            return self.state;
        };

        if self.signal.is_cancelled() {
            debug!(?kind, "stop observed at phase boundary");
            self.state = SessionState::Stopped;
            return self.state;
        }

        let outcome = self.run_phase(kind).await;
        self.state = self.next_state(kind, outcome);
        debug!(state = ?self.state, round = self.round.number(), "session advanced");
        self.state
    }

    async fn run_phase(&mut self, kind: PhaseKind) -> CountdownOutcome {
        let mut phase = Phase::start(kind);
        debug!(?kind, started_at = %phase.started_at, "phase started");

        self.events.emit(&SessionEvent::PhaseStarted { kind });
        self.display.phase_started(kind);

        let outcome = self.countdown.run(kind, phase.planned).await;

        self.display.phase_finished(kind);
        phase.finish(outcome.elapsed);
        self.record(&phase, outcome.cancelled);

        self.events.emit(&SessionEvent::PhaseCompleted {
            kind,
            elapsed_minutes: phase.elapsed_minutes(),
        });

        outcome
    }

    fn record(&mut self, phase: &Phase, cancelled: bool) {
        let elapsed = phase.elapsed.unwrap_or_default();

        if phase.kind.is_break() {
            self.statistics.record_break(elapsed);
        } else {
            self.statistics.record_work(elapsed, !cancelled);
        }
    }

    fn next_state(&mut self, finished: PhaseKind, outcome: CountdownOutcome) -> SessionState {
        if outcome.cancelled {
            return SessionState::Stopped;
        }

        match finished {
            PhaseKind::Work => SessionState::ShortBreak,
            PhaseKind::ShortBreak => self.round.complete_pair().into(),
            PhaseKind::LongBreak => {
                self.round = self.round.next();
                SessionState::Work
            }
        }
    }

    fn finish(self) -> RunStatistics {
        debug!("session stopped");
        self.events.emit(&SessionEvent::StopRequested);

        debug!(
            completed_cycles = self.statistics.completed_cycles,
            work_minutes = self.statistics.work_minutes(),
            break_minutes = self.statistics.break_minutes(),
            "session summary"
        );
        self.events.emit(&SessionEvent::summary(&self.statistics));

        self.statistics
    }
}
