use std::time::Duration;

use crate::baseline::Ema;
use crate::{DetectorEvent, RunState};

/// Tri-state detector for sustained activity with a clear start and end,
/// such as a dryer cycle measured through drum vibration.
///
/// Entering `Running` requires the smoothed variance to stay continuously
/// at or above the threshold for the start window; leaving requires it to
/// stay continuously below for the (longer) stop window. The asymmetry
/// biases toward catching a real start and toward not ending a cycle on a
/// brief lull between drum reversals. Each transition emits exactly one
/// event.
#[derive(Debug)]
pub struct DutyDetector {
    filter: Ema,
    threshold: f64,
    start_confirm: Duration,
    stop_confirm: Duration,
    period: Duration,
    state: RunState,
    window_since: Option<Duration>,
}

impl DutyDetector {
    pub fn new(
        alpha: f64,
        threshold: f64,
        start_confirm: Duration,
        stop_confirm: Duration,
        period: Duration,
    ) -> Self {
        Self {
            filter: Ema::new(alpha),
            threshold,
            start_confirm,
            stop_confirm,
            period,
            state: RunState::Idle,
            window_since: None,
        }
    }

    /// Dryer preset: vibration variance gate with a 4 s start window and a
    /// 25 s stop window.
    pub fn dryer() -> Self {
        Self::new(
            0.05,
            0.02,
            Duration::from_secs(4),
            Duration::from_secs(25),
            Duration::from_millis(200),
        )
    }

    /// Reset to initial conditions and begin a fresh listening session.
    pub fn start(&mut self) {
        self.filter.reset();
        self.state = RunState::Idle;
        self.window_since = None;
    }

    /// Halt the session. Idempotent; no further events are emitted.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.window_since = None;
    }

    /// Record that the backing hardware capability is absent.
    pub fn mark_unavailable(&mut self) {
        self.state = RunState::Unavailable;
    }

    /// Feed one sample taken `now` after the session started.
    pub fn on_sample(&mut self, raw: f64, now: Duration) -> Option<DetectorEvent> {
        match self.state {
            RunState::Stopped | RunState::Unavailable => return None,
            _ => {}
        }

        self.filter.update(raw);
        let active = self.filter.variance() >= self.threshold;

        match self.state {
            RunState::Idle | RunState::Listening => {
                if active {
                    self.state = RunState::ConfirmingStart;
                    self.window_since = Some(now);
                }
                None
            }
            RunState::ConfirmingStart => {
                if !active {
                    // Burst too short to be a real start.
                    self.state = RunState::Idle;
                    self.window_since = None;
                    None
                } else if self.window_elapsed(now, self.start_confirm) {
                    self.state = RunState::Running;
                    self.window_since = None;
                    Some(DetectorEvent::Started)
                } else {
                    None
                }
            }
            RunState::Running => {
                if !active {
                    self.state = RunState::ConfirmingStop;
                    self.window_since = Some(now);
                }
                None
            }
            RunState::ConfirmingStop => {
                if active {
                    // Just a lull; still running.
                    self.state = RunState::Running;
                    self.window_since = None;
                    None
                } else if self.window_elapsed(now, self.stop_confirm) {
                    self.state = RunState::Idle;
                    self.window_since = None;
                    Some(DetectorEvent::Finished)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn window_elapsed(&self, now: Duration, confirm: Duration) -> bool {
        match self.window_since {
            Some(since) => now.saturating_sub(since) >= confirm,
            None => false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn status(&self) -> &'static str {
        self.state.as_str()
    }

    pub fn mean(&self) -> f64 {
        self.filter.mean()
    }

    pub fn variance(&self) -> f64 {
        self.filter.variance()
    }

    /// Nominal sampling period the caller should tick at.
    pub fn sample_period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Feeds a pre-smoothed variance signal through a detector whose filter
    // is effectively transparent, so window timing is exercised directly.
    fn transparent() -> DutyDetector {
        DutyDetector::new(
            1.0,
            0.02,
            Duration::from_secs(4),
            Duration::from_secs(25),
            Duration::from_millis(200),
        )
    }

    // With alpha = 1 the variance after each update is (raw - prev)^2, so
    // alternating between two levels holds it above any small threshold
    // and a constant stream drops it to zero.
    fn agitated(i: u64) -> f64 {
        if i % 2 == 0 {
            1.5
        } else {
            0.5
        }
    }

    fn run(
        detector: &mut DutyDetector,
        from_s: u64,
        to_s: u64,
        raw: impl Fn(u64) -> f64,
    ) -> Vec<(u64, DetectorEvent)> {
        let mut events = Vec::new();
        for t in from_s..to_s {
            if let Some(event) = detector.on_sample(raw(t), Duration::from_secs(t)) {
                events.push((t, event));
            }
        }
        events
    }

    #[test]
    fn short_burst_never_starts() {
        let mut detector = transparent();
        detector.start();

        detector.on_sample(1.0, Duration::from_secs(0));
        // Above threshold for 3 s, below the 4 s start window.
        let events = run(&mut detector, 1, 4, agitated);
        assert!(events.is_empty());

        // Back to calm: confirmation window abandoned.
        let events = run(&mut detector, 4, 20, |_| 1.0);
        assert!(events.is_empty());
        assert_eq!(detector.state(), RunState::Idle);
    }

    #[test]
    fn sustained_activity_starts_exactly_once() {
        let mut detector = transparent();
        detector.start();

        detector.on_sample(1.0, Duration::from_secs(0));
        let events = run(&mut detector, 1, 60, agitated);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, DetectorEvent::Started);
        // Window opens at t=1, confirms once 4 s have elapsed.
        assert_eq!(events[0].0, 5);
        assert_eq!(detector.state(), RunState::Running);
    }

    #[test]
    fn brief_lull_does_not_finish() {
        let mut detector = transparent();
        detector.start();

        detector.on_sample(1.0, Duration::from_secs(0));
        run(&mut detector, 1, 30, agitated);
        assert_eq!(detector.state(), RunState::Running);

        // 10 s of calm: shorter than the 25 s stop window.
        let events = run(&mut detector, 30, 40, |_| 1.0);
        assert!(events.is_empty());

        // Agitation resumes; still the same run, no second Started.
        let events = run(&mut detector, 40, 60, agitated);
        assert!(events.is_empty());
        assert_eq!(detector.state(), RunState::Running);
    }

    #[test]
    fn long_lull_finishes_exactly_once() {
        let mut detector = transparent();
        detector.start();

        detector.on_sample(1.0, Duration::from_secs(0));
        run(&mut detector, 1, 30, agitated);

        let events = run(&mut detector, 30, 90, |_| 1.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, DetectorEvent::Finished);
        assert_eq!(detector.state(), RunState::Idle);
    }

    #[test]
    fn full_cycle_emits_started_then_finished() {
        let mut detector = transparent();
        detector.start();

        detector.on_sample(1.0, Duration::from_secs(0));
        let mut events = run(&mut detector, 1, 40, agitated);
        events.extend(run(&mut detector, 40, 100, |_| 1.0));

        let kinds: Vec<_> = events.iter().map(|(_, e)| *e).collect();
        assert_eq!(kinds, vec![DetectorEvent::Started, DetectorEvent::Finished]);
    }

    #[test]
    fn stop_is_terminal_and_idempotent() {
        let mut detector = DutyDetector::dryer();
        detector.start();
        detector.stop();
        detector.stop();

        assert_eq!(detector.on_sample(5.0, Duration::from_secs(1)), None);
        assert_eq!(detector.status(), "stopped");
    }
}
