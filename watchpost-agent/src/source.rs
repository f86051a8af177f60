use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulate;

/// One scalar signal a detector listens to. Implementations decide where
/// the numbers come from; the run loop only ever sees `(raw, elapsed)`
/// pairs on its sampling tick.
pub trait SignalSource: Send {
    fn name(&self) -> &'static str;

    /// Whether the backing capability exists at all. A source that
    /// reports `false` is never sampled; the detector is parked as
    /// unavailable instead.
    fn is_available(&self) -> bool {
        true
    }

    fn sample(&mut self, elapsed: Duration) -> f64;
}

/// Brightness sensor inside a mailbox.
pub struct SimulatedBrightness {
    rng: StdRng,
}

impl SimulatedBrightness {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SignalSource for SimulatedBrightness {
    fn name(&self) -> &'static str {
        "simulated-brightness"
    }

    fn sample(&mut self, elapsed: Duration) -> f64 {
        simulate::mailbox_brightness(elapsed.as_secs_f64()) + self.rng.random_range(-0.003..0.003)
    }
}

/// Accelerometer magnitude on a dryer running one cycle per session.
pub struct SimulatedDrum {
    cycle_start: f64,
    cycle_stop: f64,
    rng: StdRng,
}

impl SimulatedDrum {
    pub fn cycle(start: Duration, stop: Duration) -> Self {
        Self {
            cycle_start: start.as_secs_f64(),
            cycle_stop: stop.as_secs_f64(),
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SignalSource for SimulatedDrum {
    fn name(&self) -> &'static str {
        "simulated-accelerometer"
    }

    fn sample(&mut self, elapsed: Duration) -> f64 {
        simulate::drum_magnitude(elapsed.as_secs_f64(), self.cycle_start, self.cycle_stop)
            + self.rng.random_range(-0.003..0.003)
    }
}

/// Microphone amplitude in a quiet room with periodic loud bursts.
pub struct SimulatedMicrophone {
    rng: StdRng,
}

impl SimulatedMicrophone {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SignalSource for SimulatedMicrophone {
    fn name(&self) -> &'static str {
        "simulated-microphone"
    }

    fn sample(&mut self, elapsed: Duration) -> f64 {
        (simulate::room_amplitude(elapsed.as_secs_f64()) + self.rng.random_range(-0.01..0.01))
            .clamp(0.0, 1.0)
    }
}

/// Accelerometer magnitude on a device waiting to be picked up.
pub struct SimulatedPickup {
    rng: StdRng,
}

impl SimulatedPickup {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SignalSource for SimulatedPickup {
    fn name(&self) -> &'static str {
        "simulated-motion"
    }

    fn sample(&mut self, elapsed: Duration) -> f64 {
        simulate::pickup_magnitude(elapsed.as_secs_f64()) + self.rng.random_range(-0.003..0.003)
    }
}
