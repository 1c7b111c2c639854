#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Work => "work",
            PhaseKind::ShortBreak => "short-break",
            PhaseKind::LongBreak => "long-break",
        }
    }

    /// Breaks of both lengths share the same statistics bucket.
    pub fn is_break(&self) -> bool {
        matches!(self, PhaseKind::ShortBreak | PhaseKind::LongBreak)
    }

    /// Label shown in front of the remaining time on the terminal.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseKind::Work => "Time remaining:",
            PhaseKind::ShortBreak => "Break Time remaining:",
            PhaseKind::LongBreak => "Long Break Time remaining:",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
