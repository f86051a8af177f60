//! Noise-free reference waveforms for each simulated sensor. Sources add
//! their own jitter on top; keeping these pure makes detector timing
//! reproducible in tests.

/// Screen-facing brightness inside a closed mailbox: near-dark, with a
/// bright window while the door hangs open once per delivery period.
pub fn mailbox_brightness(elapsed_secs: f64) -> f64 {
    const DELIVERY_PERIOD: f64 = 90.0;
    const DOOR_OPEN_AT: f64 = 60.0;
    const DOOR_OPEN_FOR: f64 = 5.0;

    let phase = elapsed_secs % DELIVERY_PERIOD;
    if phase >= DOOR_OPEN_AT && phase < DOOR_OPEN_AT + DOOR_OPEN_FOR {
        0.85
    } else {
        0.02
    }
}

/// Accelerometer magnitude in g on top of a dryer: 1 g at rest, an
/// oscillation around 1 g while the drum turns between `cycle_start` and
/// `cycle_stop` seconds into the session.
pub fn drum_magnitude(elapsed_secs: f64, cycle_start: f64, cycle_stop: f64) -> f64 {
    if elapsed_secs >= cycle_start && elapsed_secs < cycle_stop {
        1.0 + (elapsed_secs * 8.0).sin() * 0.25
    } else {
        1.0
    }
}

/// Linear microphone amplitude in 0..1: quiet room with a one-second
/// loud burst once a minute.
pub fn room_amplitude(elapsed_secs: f64) -> f64 {
    const BURST_PERIOD: f64 = 60.0;
    const BURST_AT: f64 = 30.0;

    let phase = elapsed_secs % BURST_PERIOD;
    if phase >= BURST_AT && phase < BURST_AT + 1.0 {
        0.9
    } else {
        0.05
    }
}

/// Magnitude for presence watching: rest at 1 g, with a bump when the
/// device gets picked up.
pub fn pickup_magnitude(elapsed_secs: f64) -> f64 {
    const VISIT_PERIOD: f64 = 120.0;
    const PICKUP_AT: f64 = 45.0;

    let phase = elapsed_secs % VISIT_PERIOD;
    if phase >= PICKUP_AT && phase < PICKUP_AT + 1.0 {
        1.35
    } else {
        1.0
    }
}
