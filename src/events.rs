//! Progress and completion events.
//!
//! Reporters never reach for a global logger: they get an [`EventSink`] from the caller. The
//! binary passes a [`TracingSink`], tests pass whatever lets them inspect the emitted events.

pub trait EventSink {
    fn info(&self, message: &str);
}

/// Forwards every event to [`tracing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
