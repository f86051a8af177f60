use std::time::Duration;

use crate::baseline::Ema;
use crate::{DetectorEvent, RunState};

/// How a binary detector decides a sample qualifies as "over threshold".
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Signal rose against a fixed baseline seeded from the first sample,
    /// either relatively or absolutely. Used for screen brightness, where
    /// the resting level varies wildly between installs.
    BaselineRise {
        ratio_threshold: f64,
        absolute_delta: f64,
    },
    /// Absolute deviation from a known rest value. Used for accelerometer
    /// magnitude, which sits at 1 g while the device lies still.
    Offset { reference: f64, threshold: f64 },
    /// Plain level crossing. Used for linear microphone amplitude in 0..1.
    Level { threshold: f64 },
    /// Smoothed variance of the stream itself crossing a threshold. Used
    /// for vibration, where single readings are too noisy to gate on.
    Variance { alpha: f64, threshold: f64 },
}

/// Binary debounced detector: one [`DetectorEvent::Spike`] per qualifying
/// crossing, then nothing until the cooldown window has fully elapsed.
///
/// The cooldown is the deduplication boundary for the whole pipeline; the
/// fan-out service downstream deliberately performs none of its own.
#[derive(Debug)]
pub struct SpikeDetector {
    trigger: Trigger,
    cooldown: Duration,
    period: Duration,
    baseline: Option<f64>,
    filter: Option<Ema>,
    last_trigger_at: Option<Duration>,
    state: RunState,
}

impl SpikeDetector {
    pub fn new(trigger: Trigger, cooldown: Duration, period: Duration) -> Self {
        let filter = match &trigger {
            Trigger::Variance { alpha, .. } => Some(Ema::new(*alpha)),
            _ => None,
        };

        Self {
            trigger,
            cooldown,
            period,
            baseline: None,
            filter,
            last_trigger_at: None,
            state: RunState::Idle,
        }
    }

    /// Mailbox door opening: auto-brightness jumps when the door lets
    /// light in.
    pub fn mailbox() -> Self {
        Self::new(
            Trigger::BaselineRise {
                ratio_threshold: 1.8,
                absolute_delta: 0.12,
            },
            Duration::from_secs(12),
            Duration::from_secs(1),
        )
    }

    /// Vibration spike on accelerometer magnitude variance.
    pub fn vibration() -> Self {
        Self::new(
            Trigger::Variance {
                alpha: 0.05,
                threshold: 0.02,
            },
            Duration::from_secs(10),
            Duration::from_millis(200),
        )
    }

    /// Sound amplitude crossing a user-tuned threshold, clamped to the
    /// range the setup form accepts.
    pub fn sound(threshold: f64) -> Self {
        Self::new(
            Trigger::Level {
                threshold: threshold.clamp(0.1, 1.0),
            },
            Duration::from_secs(10),
            Duration::from_millis(300),
        )
    }

    /// Presence: the device itself being bumped or picked up.
    pub fn presence() -> Self {
        Self::new(
            Trigger::Offset {
                reference: 1.0,
                threshold: 0.15,
            },
            Duration::from_secs(20),
            Duration::from_millis(500),
        )
    }

    /// Reset to initial conditions and begin a fresh listening session.
    pub fn start(&mut self) {
        self.baseline = None;
        if let Some(filter) = &mut self.filter {
            filter.reset();
        }
        self.last_trigger_at = None;
        self.state = RunState::Listening;
    }

    /// Halt the session. Idempotent; no further events are emitted.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Record that the backing hardware capability is absent. Terminal for
    /// this instance; reported through [`Self::status`], never an error.
    pub fn mark_unavailable(&mut self) {
        self.state = RunState::Unavailable;
    }

    /// Feed one sample taken `now` after the session started.
    pub fn on_sample(&mut self, raw: f64, now: Duration) -> Option<DetectorEvent> {
        match self.state {
            RunState::Listening | RunState::Triggered => {}
            _ => return None,
        }

        let over = match &self.trigger {
            Trigger::BaselineRise {
                ratio_threshold,
                absolute_delta,
            } => {
                let Some(baseline) = self.baseline else {
                    // First sample calibrates; never triggers.
                    self.baseline = Some(raw.max(0.001));
                    return None;
                };
                raw / baseline >= *ratio_threshold || raw - baseline >= *absolute_delta
            }
            Trigger::Offset {
                reference,
                threshold,
            } => (raw - reference).abs() >= *threshold,
            Trigger::Level { threshold } => raw >= *threshold,
            Trigger::Variance { threshold, .. } => {
                let filter = self.filter.as_mut().expect("variance trigger has a filter");
                filter.update(raw);
                filter.variance() >= *threshold
            }
        };

        if !over {
            self.state = RunState::Listening;
            return None;
        }

        if !self.cooldown_elapsed(now) {
            return None;
        }

        self.last_trigger_at = Some(now);
        self.state = RunState::Triggered;
        Some(DetectorEvent::Spike)
    }

    fn cooldown_elapsed(&self, now: Duration) -> bool {
        match self.last_trigger_at {
            Some(at) => now.saturating_sub(at) >= self.cooldown,
            None => true,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn status(&self) -> &'static str {
        self.state.as_str()
    }

    /// Calibrated brightness baseline, once the first sample has arrived.
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Current smoothed variance, for variance-triggered detectors.
    pub fn variance(&self) -> Option<f64> {
        self.filter.as_ref().map(|f| f.variance())
    }

    /// Nominal sampling period the caller should tick at.
    pub fn sample_period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn single_crossing_fires_exactly_once() {
        let mut detector = SpikeDetector::mailbox();
        detector.start();

        assert_eq!(detector.on_sample(0.10, secs(0)), None); // calibrates
        for t in 1..5 {
            assert_eq!(detector.on_sample(0.10, secs(t)), None);
        }
        assert_eq!(detector.baseline(), Some(0.10));

        assert_eq!(
            detector.on_sample(0.30, secs(5)),
            Some(DetectorEvent::Spike)
        );
        assert_eq!(detector.state(), RunState::Triggered);
    }

    #[test]
    fn cooldown_suppresses_then_rearms() {
        let mut detector = SpikeDetector::mailbox();
        detector.start();

        detector.on_sample(0.10, secs(0));
        assert_eq!(
            detector.on_sample(0.30, secs(1)),
            Some(DetectorEvent::Spike)
        );

        // Equally large sample inside the 12 s cooldown: nothing.
        assert_eq!(detector.on_sample(0.30, secs(5)), None);
        assert_eq!(detector.on_sample(0.30, secs(12)), None);

        // Same sample once the cooldown has elapsed: exactly one more.
        assert_eq!(
            detector.on_sample(0.30, secs(13)),
            Some(DetectorEvent::Spike)
        );
    }

    #[test]
    fn absolute_delta_triggers_without_ratio() {
        // Bright resting baseline: ratio stays small but the delta rule
        // still catches the door opening.
        let mut detector = SpikeDetector::mailbox();
        detector.start();

        detector.on_sample(0.60, secs(0));
        assert_eq!(
            detector.on_sample(0.75, secs(1)),
            Some(DetectorEvent::Spike)
        );
    }

    #[test]
    fn presence_fires_on_deviation_from_rest() {
        let mut detector = SpikeDetector::presence();
        detector.start();

        assert_eq!(detector.on_sample(1.02, secs(0)), None);
        assert_eq!(detector.state(), RunState::Listening);

        assert_eq!(
            detector.on_sample(1.20, secs(1)),
            Some(DetectorEvent::Spike)
        );
        // A lift reads below 1 g as well.
        assert_eq!(detector.on_sample(0.80, secs(30)), Some(DetectorEvent::Spike));
    }

    #[test]
    fn sound_threshold_is_clamped() {
        let mut detector = SpikeDetector::sound(7.0);
        detector.start();

        // Clamped to 1.0, so full scale still triggers.
        assert_eq!(detector.on_sample(1.0, secs(0)), Some(DetectorEvent::Spike));

        let mut detector = SpikeDetector::sound(0.0);
        detector.start();
        // Clamped up to 0.1: silence stays quiet.
        assert_eq!(detector.on_sample(0.05, secs(0)), None);
        assert_eq!(detector.on_sample(0.1, secs(1)), Some(DetectorEvent::Spike));
    }

    #[test]
    fn vibration_needs_sustained_agitation_not_one_outlier() {
        let mut detector = SpikeDetector::vibration();
        detector.start();

        detector.on_sample(1.0, secs(0));
        // One outlier barely moves the smoothed variance.
        assert_eq!(detector.on_sample(1.5, secs(1)), None);

        let mut fired = false;
        for t in 2..60 {
            let raw = if t % 2 == 0 { 1.6 } else { 0.4 };
            if detector.on_sample(raw, secs(t)).is_some() {
                fired = true;
                break;
            }
        }
        assert!(fired, "sustained shaking should cross the variance threshold");
    }

    #[test]
    fn stopped_and_unavailable_emit_nothing() {
        let mut detector = SpikeDetector::presence();
        detector.start();
        detector.stop();
        detector.stop(); // idempotent
        assert_eq!(detector.on_sample(2.0, secs(0)), None);
        assert_eq!(detector.status(), "stopped");

        let mut detector = SpikeDetector::presence();
        detector.mark_unavailable();
        assert_eq!(detector.on_sample(2.0, secs(0)), None);
        assert_eq!(detector.status(), "unavailable");
    }

    #[test]
    fn start_resets_a_previous_session() {
        let mut detector = SpikeDetector::mailbox();
        detector.start();
        detector.on_sample(0.10, secs(0));
        detector.on_sample(0.30, secs(1));
        detector.stop();

        detector.start();
        assert_eq!(detector.baseline(), None);
        // Fresh session: first sample calibrates again, and the old
        // trigger timestamp no longer suppresses anything.
        assert_eq!(detector.on_sample(0.10, secs(0)), None);
        assert_eq!(
            detector.on_sample(0.30, secs(1)),
            Some(DetectorEvent::Spike)
        );
    }
}
