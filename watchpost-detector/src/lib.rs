//! Debounced event detection over noisy scalar sample streams.
//!
//! A detector is a pure state machine: the caller samples its signal on a
//! timer and feeds `(raw, now)` pairs in, where `now` is the elapsed time
//! since the session started. At most one event comes back per sample.
//! Nothing here does I/O or keeps sample history, so a whole listening
//! session replays deterministically from a synthetic sample sequence.

mod baseline;
mod duty;
mod spike;

pub use baseline::Ema;
pub use duty::DutyDetector;
pub use spike::{SpikeDetector, Trigger};

/// Discrete outcome of one qualifying signal crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorEvent {
    /// One-shot crossing (mailbox opened, loud sound, presence bump).
    Spike,
    /// Sustained activity confirmed (dryer drum started).
    Started,
    /// Sustained activity ended (dryer drum stopped).
    Finished,
}

/// Lifecycle of a detector instance.
///
/// `Unavailable` is terminal and reported, not an error: a detector whose
/// hardware capability is absent simply never emits events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Listening,
    Triggered,
    ConfirmingStart,
    Running,
    ConfirmingStop,
    Stopped,
    Unavailable,
}

impl RunState {
    /// Stable label for heartbeat payloads and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Listening => "listening",
            RunState::Triggered => "triggered",
            RunState::ConfirmingStart => "confirming-start",
            RunState::Running => "running",
            RunState::ConfirmingStop => "confirming-stop",
            RunState::Stopped => "stopped",
            RunState::Unavailable => "unavailable",
        }
    }
}

impl core::fmt::Display for RunState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
