use crate::domain::SessionEvent;

/// Append-only destination for session events. Fire-and-forget.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SessionEvent);
}
