use std::io::{Stdout, Write};
use std::sync::Mutex;

use cadence_core::{DisplaySink, PhaseKind, RemainingTime};
use tracing::debug;

use crate::banner;

/// Renders the countdown on a single line refreshed with a carriage return.
pub struct TerminalDisplay<W> {
    out: Mutex<W>,
    banners: bool,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout(banners: bool) -> Self {
        Self::new(std::io::stdout(), banners)
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W, banners: bool) -> Self {
        Self {
            out: Mutex::new(out),
            banners,
        }
    }

    fn write(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };

        if let Err(error) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            debug!(%error, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DisplaySink for TerminalDisplay<W> {
    fn phase_started(&self, kind: PhaseKind) {
        if self.banners {
            self.write(&banner::phase(kind));
        }
    }

    fn tick(&self, kind: PhaseKind, remaining: RemainingTime) {
        self.write(&format!("\r{} {}", kind.label(), remaining));
    }

    fn phase_finished(&self, _kind: PhaseKind) {
        self.write("\n");
    }
}
