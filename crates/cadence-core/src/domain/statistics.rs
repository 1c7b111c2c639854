use std::time::Duration;

/// Totals accumulated over one run of the timer.
///
/// Owned by the session machine while it runs and handed back by value once
/// the run stops, at which point it is only read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStatistics {
    pub total_work: Duration,
    pub total_break: Duration,
    pub completed_cycles: u32,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_work(&mut self, elapsed: Duration, completed_fully: bool) {
        self.total_work += elapsed;
        if completed_fully {
            self.completed_cycles += 1;
        }
    }

    /// Short and long breaks land in the same bucket, cancelled or not.
    pub fn record_break(&mut self, elapsed: Duration) {
        self.total_break += elapsed;
    }

    pub fn work_minutes(&self) -> f64 {
        self.total_work.as_secs_f64() / 60.0
    }

    pub fn break_minutes(&self) -> f64 {
        self.total_break.as_secs_f64() / 60.0
    }
}
