use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::domain::{PhaseKind, RemainingTime};
use crate::ports::DisplaySink;
use crate::CancellationSignal;

pub const TICK: Duration = Duration::from_secs(1);

/// Remaining-time values of one countdown, from the planned duration down to
/// zero inclusive. A fresh `Ticks` is built for every run.
#[derive(Debug, Clone)]
pub struct Ticks {
    next: Option<u64>,
}

impl Ticks {
    pub fn new(total_seconds: u64) -> Self {
        Self {
            next: Some(total_seconds),
        }
    }
}

impl Iterator for Ticks {
    type Item = RemainingTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_sub(1);
        Some(RemainingTime::from_secs(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .next
            .map(|current| usize::try_from(current).unwrap_or(usize::MAX).saturating_add(1))
            .unwrap_or(0);
        (len, Some(len))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownOutcome {
    /// Real time spent in the countdown, measured on the clock.
    pub elapsed: Duration,
    /// Whether the stop signal was seen before the countdown ran out.
    pub cancelled: bool,
}

pub struct Countdown {
    display: Arc<dyn DisplaySink>,
    signal: CancellationSignal,
}

impl Countdown {
    pub fn new(display: Arc<dyn DisplaySink>, signal: CancellationSignal) -> Self {
        Self { display, signal }
    }

    /// Counts `duration` down one second at a time.
    ///
    /// Every value is displayed before the stop signal is checked, so a
    /// countdown entered after cancellation still shows its starting value
    /// once. No sleep follows the final zero.
    pub async fn run(&self, kind: PhaseKind, duration: Duration) -> CountdownOutcome {
        let started = Instant::now();
        let mut cancelled = false;

        for remaining in Ticks::new(duration.as_secs()) {
            self.display.tick(kind, remaining);

            if self.signal.is_cancelled() {
                debug!(?kind, %remaining, "countdown cancelled");
                cancelled = true;
                break;
            }

            if remaining.as_secs() > 0 {
                tokio::time::sleep(TICK).await;
            }
        }

        CountdownOutcome {
            elapsed: started.elapsed(),
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDisplay;

    fn countdown_with(display: &Arc<RecordingDisplay>, signal: &CancellationSignal) -> Countdown {
        Countdown::new(display.clone(), signal.clone())
    }

    #[test]
    fn ticks_count_down_to_zero_inclusive() {
        let values: Vec<u64> = Ticks::new(3).map(|remaining| remaining.as_secs()).collect();
        assert_eq!(values, vec![3, 2, 1, 0]);
    }

    #[test]
    fn ticks_for_zero_yield_a_single_value() {
        let ticks = Ticks::new(0);
        assert_eq!(ticks.size_hint(), (1, Some(1)));
        assert_eq!(ticks.count(), 1);
    }

    #[test]
    fn ticks_restart_per_instance() {
        let mut first = Ticks::new(2);
        first.next();
        first.next();

        let second = Ticks::new(2);

        assert_eq!(first.size_hint(), (1, Some(1)));
        assert_eq!(second.size_hint(), (3, Some(3)));
    }

    #[tokio::test(start_paused = true)]
    async fn uncancelled_run_shows_every_second() {
        let display = Arc::new(RecordingDisplay::new());
        let signal = CancellationSignal::new();

        let outcome = countdown_with(&display, &signal)
            .run(PhaseKind::Work, Duration::from_secs(5))
            .await;

        assert_eq!(
            display.remaining_seconds_for(PhaseKind::Work),
            vec![5, 4, 3, 2, 1, 0]
        );
        assert_eq!(outcome.elapsed.as_secs(), 5);
        assert!(!outcome.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_shows_once_without_sleeping() {
        let display = Arc::new(RecordingDisplay::new());
        let signal = CancellationSignal::new();

        let outcome = countdown_with(&display, &signal)
            .run(PhaseKind::ShortBreak, Duration::ZERO)
            .await;

        assert_eq!(display.remaining_seconds_for(PhaseKind::ShortBreak), vec![0]);
        assert_eq!(outcome.elapsed, Duration::ZERO);
        assert!(!outcome.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn already_cancelled_shows_starting_value_once() {
        let display = Arc::new(RecordingDisplay::new());
        let signal = CancellationSignal::new();
        signal.cancel();

        let outcome = countdown_with(&display, &signal)
            .run(PhaseKind::Work, Duration::from_secs(1800))
            .await;

        assert_eq!(display.remaining_seconds_for(PhaseKind::Work), vec![1800]);
        assert_eq!(outcome.elapsed, Duration::ZERO);
        assert!(outcome.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_after_update_k_stops_with_k_elapsed() {
        for total in 0..=6u64 {
            for k in 0..=total {
                let signal = CancellationSignal::new();
                let display = Arc::new(RecordingDisplay::cancelling_at(
                    signal.clone(),
                    PhaseKind::Work,
                    total - k,
                ));

                let outcome = countdown_with(&display, &signal)
                    .run(PhaseKind::Work, Duration::from_secs(total))
                    .await;

                let shown = display.remaining_seconds_for(PhaseKind::Work);
                assert_eq!(shown.len() as u64, k + 1, "total={total} k={k}");
                assert_eq!(shown.last().copied(), Some(total - k));
                assert_eq!(outcome.elapsed.as_secs(), k, "total={total} k={k}");
                assert!(outcome.cancelled);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_at_final_tick_is_still_reported() {
        let signal = CancellationSignal::new();
        let display = Arc::new(RecordingDisplay::cancelling_at(
            signal.clone(),
            PhaseKind::Work,
            0,
        ));

        let outcome = countdown_with(&display, &signal)
            .run(PhaseKind::Work, Duration::from_secs(3))
            .await;

        assert_eq!(display.remaining_seconds_for(PhaseKind::Work), vec![3, 2, 1, 0]);
        assert_eq!(outcome.elapsed.as_secs(), 3);
        assert!(outcome.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_stop_is_observed_within_one_tick() {
        let display = Arc::new(RecordingDisplay::new());
        let signal = CancellationSignal::new();

        let listener_signal = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            listener_signal.cancel();
        });

        let outcome = countdown_with(&display, &signal)
            .run(PhaseKind::LongBreak, Duration::from_secs(10))
            .await;

        assert_eq!(
            display.remaining_seconds_for(PhaseKind::LongBreak),
            vec![10, 9, 8, 7]
        );
        assert_eq!(outcome.elapsed.as_secs(), 3);
        assert!(outcome.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_cancel_behaves_like_a_single_one() {
        let once = CancellationSignal::new();
        once.cancel();
        let twice = CancellationSignal::new();
        twice.cancel();
        twice.cancel();

        let display_once = Arc::new(RecordingDisplay::new());
        let display_twice = Arc::new(RecordingDisplay::new());

        let first = countdown_with(&display_once, &once)
            .run(PhaseKind::Work, Duration::from_secs(4))
            .await;
        let second = countdown_with(&display_twice, &twice)
            .run(PhaseKind::Work, Duration::from_secs(4))
            .await;

        assert_eq!(first, second);
        assert_eq!(display_once.ticks(), display_twice.ticks());
    }
}
