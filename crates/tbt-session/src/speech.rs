//! Speech output collaborator.

use tbt_tracker::AnnouncementEvent;

/// Receives every announcement the session produces.
///
/// Implement this over the platform's speech synthesizer.  `text` is the
/// rendered sentence; `event` carries the structured data for sinks that
/// want to build their own phrasing or localise.
pub trait SpeechSink {
    fn speak(&mut self, text: &str, event: &AnnouncementEvent);

    /// Interrupt anything still being spoken.  Called when navigation is
    /// cancelled.
    ///
    /// Default: no-op.
    fn stop(&mut self) {}
}

/// A [`SpeechSink`] that discards everything.
pub struct NoopSpeech;

impl SpeechSink for NoopSpeech {
    fn speak(&mut self, _text: &str, _event: &AnnouncementEvent) {}
}

/// Collects spoken lines in order.  Used by the demo and tests.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
    stops: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of times speech was interrupted.
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// Take all collected lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl SpeechSink for Transcript {
    fn speak(&mut self, text: &str, _event: &AnnouncementEvent) {
        self.lines.push(text.to_owned());
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}
