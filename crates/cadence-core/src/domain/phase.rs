use std::time::Duration;

use chrono::{DateTime, Utc};

use super::PhaseKind;

/// A single countdown instance, alive from its start until its elapsed time
/// has been folded into the run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub planned: Duration,
    pub started_at: DateTime<Utc>,
    pub elapsed: Option<Duration>,
}

impl Phase {
    pub fn start(kind: PhaseKind) -> Self {
        Self {
            kind,
            planned: kind.planned_duration(),
            started_at: Utc::now(),
            elapsed: None,
        }
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_none()
    }

    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed
            .map(|elapsed| elapsed.as_secs_f64() / 60.0)
            .unwrap_or(0.0)
    }
}
