/// Single-pole IIR estimate of a signal's mean and variance.
///
/// The first sample seeds the mean; from then on both statistics follow
/// `mean += alpha * diff` and `variance += alpha * (diff^2 - variance)`.
/// Tracking the smoothed squared deviation approximates a rolling variance
/// without storing any sample history, which is the "is something
/// happening" signal the vibration detectors threshold on.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
    mean: f64,
    variance: f64,
    initialized: bool,
}

impl Ema {
    pub fn new(alpha: f64) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0);
        Self {
            alpha,
            mean: 0.0,
            variance: 0.0,
            initialized: false,
        }
    }

    /// Forget everything; the next sample seeds the baseline again.
    pub fn reset(&mut self) {
        self.mean = 0.0;
        self.variance = 0.0;
        self.initialized = false;
    }

    pub fn update(&mut self, raw: f64) {
        if !self.initialized {
            self.initialized = true;
            self.mean = raw;
            self.variance = 0.0;
            return;
        }

        let diff = raw - self.mean;
        self.mean += self.alpha * diff;
        self.variance += self.alpha * (diff * diff - self.variance);
        if self.variance < 0.0 {
            self.variance = 0.0;
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
