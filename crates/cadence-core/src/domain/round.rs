use std::time::Duration;

use super::PhaseKind;

pub const WORK_SECONDS: u64 = 30 * 60;
pub const SHORT_BREAK_SECONDS: u64 = 5 * 60;
pub const LONG_BREAK_SECONDS: u64 = 20 * 60;

/// Number of (work, short break) pairs before a long break.
pub const PAIRS_PER_ROUND: u32 = 4;

impl PhaseKind {
    pub fn planned_duration(&self) -> Duration {
        let seconds = match self {
            PhaseKind::Work => WORK_SECONDS,
            PhaseKind::ShortBreak => SHORT_BREAK_SECONDS,
            PhaseKind::LongBreak => LONG_BREAK_SECONDS,
        };
        Duration::from_secs(seconds)
    }
}

/// Progress through one round of the cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    number: u32,
    pairs_completed: u32,
}

impl Round {
    pub fn first() -> Self {
        Self {
            number: 1,
            pairs_completed: 0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn pairs_completed(&self) -> u32 {
        self.pairs_completed
    }

    /// Marks a (work, short break) pair as done and returns the kind of the
    /// phase that follows it.
    pub fn complete_pair(&mut self) -> PhaseKind {
        self.pairs_completed += 1;
        if self.is_complete() {
            PhaseKind::LongBreak
        } else {
            PhaseKind::Work
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pairs_completed >= PAIRS_PER_ROUND
    }

    pub fn next(&self) -> Self {
        Self {
            number: self.number + 1,
            pairs_completed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_durations_are_fixed_per_kind() {
        assert_eq!(PhaseKind::Work.planned_duration(), Duration::from_secs(1800));
        assert_eq!(PhaseKind::ShortBreak.planned_duration(), Duration::from_secs(300));
        assert_eq!(PhaseKind::LongBreak.planned_duration(), Duration::from_secs(1200));
    }

    #[test]
    fn fourth_pair_leads_to_long_break() {
        let mut round = Round::first();

        assert_eq!(round.complete_pair(), PhaseKind::Work);
        assert_eq!(round.complete_pair(), PhaseKind::Work);
        assert_eq!(round.complete_pair(), PhaseKind::Work);
        assert!(!round.is_complete());
        assert_eq!(round.complete_pair(), PhaseKind::LongBreak);
        assert!(round.is_complete());
    }

    #[test]
    fn next_round_starts_empty() {
        let mut round = Round::first();
        for _ in 0..PAIRS_PER_ROUND {
            round.complete_pair();
        }

        let next = round.next();

        assert_eq!(next.number(), 2);
        assert_eq!(next.pairs_completed(), 0);
        assert!(!next.is_complete());
    }
}
