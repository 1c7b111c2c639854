mod display_sink;
mod event_sink;

pub use display_sink::DisplaySink;
pub use event_sink::EventSink;
