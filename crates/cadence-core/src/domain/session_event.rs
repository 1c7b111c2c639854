use super::{PhaseKind, RunStatistics};

/// Notifications emitted by the session machine, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SessionStarted,
    PhaseStarted {
        kind: PhaseKind,
    },
    PhaseCompleted {
        kind: PhaseKind,
        elapsed_minutes: f64,
    },
    StopRequested,
    Summary {
        completed_cycles: u32,
        work_minutes: f64,
        break_minutes: f64,
    },
}

impl SessionEvent {
    pub fn summary(statistics: &RunStatistics) -> Self {
        SessionEvent::Summary {
            completed_cycles: statistics.completed_cycles,
            work_minutes: statistics.work_minutes(),
            break_minutes: statistics.break_minutes(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::SessionStarted => "session_start",
            SessionEvent::PhaseStarted { kind } => match kind {
                PhaseKind::Work => "work_start",
                PhaseKind::ShortBreak => "break_start",
                PhaseKind::LongBreak => "long_break_start",
            },
            SessionEvent::PhaseCompleted { kind, .. } => match kind {
                PhaseKind::Work => "work_complete",
                PhaseKind::ShortBreak => "break_complete",
                PhaseKind::LongBreak => "long_break_complete",
            },
            SessionEvent::StopRequested => "session_end",
            SessionEvent::Summary { .. } => "summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn summary_copies_statistics_in_minutes() {
        let mut statistics = RunStatistics::new();
        statistics.record_work(Duration::from_secs(1800), true);
        statistics.record_break(Duration::from_secs(150));

        let event = SessionEvent::summary(&statistics);

        assert_eq!(
            event,
            SessionEvent::Summary {
                completed_cycles: 1,
                work_minutes: 30.0,
                break_minutes: 2.5,
            }
        );
    }

    #[test]
    fn names_distinguish_long_breaks() {
        let short = SessionEvent::PhaseCompleted {
            kind: PhaseKind::ShortBreak,
            elapsed_minutes: 5.0,
        };
        let long = SessionEvent::PhaseCompleted {
            kind: PhaseKind::LongBreak,
            elapsed_minutes: 20.0,
        };

        assert_eq!(short.name(), "break_complete");
        assert_eq!(long.name(), "long_break_complete");
        assert_eq!(
            SessionEvent::PhaseStarted {
                kind: PhaseKind::LongBreak
            }
            .name(),
            "long_break_start"
        );
    }
}
