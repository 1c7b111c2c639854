mod phase;
mod phase_kind;
mod remaining_time;
mod round;
mod session_event;
mod statistics;

pub use phase::Phase;
pub use phase_kind::PhaseKind;
pub use remaining_time::RemainingTime;
pub use round::{Round, LONG_BREAK_SECONDS, PAIRS_PER_ROUND, SHORT_BREAK_SECONDS, WORK_SECONDS};
pub use session_event::SessionEvent;
pub use statistics::RunStatistics;
