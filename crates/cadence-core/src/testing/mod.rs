mod recording_display;
mod recording_event_sink;

pub use recording_display::RecordingDisplay;
pub use recording_event_sink::RecordingEventSink;
