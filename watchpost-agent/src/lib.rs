//! Listening agent: samples one simulated sensor on the detector's own
//! period, reports qualifying events to the fan-out endpoint and keeps
//! the server's device document alive with a heartbeat.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use watchpost_api::models::{DryerEvent, EventType};
use watchpost_api::restful::FunctionConfigResponse;
use watchpost_detector::{DetectorEvent, DutyDetector, SpikeDetector};

use crate::heartbeat::{DeviceHeartbeat, HEARTBEAT_PERIOD, battery_level};
use crate::reporter::EventReporter;
use crate::settings::{Modality, Settings};
use crate::source::{
    SignalSource, SimulatedBrightness, SimulatedDrum, SimulatedMicrophone, SimulatedPickup,
};

pub mod heartbeat;
pub mod reporter;
pub mod settings;
pub mod simulate;
pub mod source;

enum Detector {
    Spike(SpikeDetector),
    Duty(DutyDetector),
}

impl Detector {
    fn start(&mut self) {
        match self {
            Detector::Spike(d) => d.start(),
            Detector::Duty(d) => d.start(),
        }
    }

    fn stop(&mut self) {
        match self {
            Detector::Spike(d) => d.stop(),
            Detector::Duty(d) => d.stop(),
        }
    }

    fn mark_unavailable(&mut self) {
        match self {
            Detector::Spike(d) => d.mark_unavailable(),
            Detector::Duty(d) => d.mark_unavailable(),
        }
    }

    fn on_sample(&mut self, raw: f64, now: Duration) -> Option<DetectorEvent> {
        match self {
            Detector::Spike(d) => d.on_sample(raw, now),
            Detector::Duty(d) => d.on_sample(raw, now),
        }
    }

    fn sample_period(&self) -> Duration {
        match self {
            Detector::Spike(d) => d.sample_period(),
            Detector::Duty(d) => d.sample_period(),
        }
    }

    fn status(&self) -> &'static str {
        match self {
            Detector::Spike(d) => d.status(),
            Detector::Duty(d) => d.status(),
        }
    }
}

pub async fn run(settings: &Arc<Settings>) {
    let agent = &settings.agent;
    let reporter = EventReporter::new(&agent.server_url, &agent.user_id);
    let heartbeat = DeviceHeartbeat::new(&agent.server_url, &agent.user_id, agent.device.clone());

    let config = reporter
        .fetch_function_config(agent.modality.function_name())
        .await;

    let mut detector = match agent.modality {
        Modality::Mailbox => Detector::Spike(SpikeDetector::mailbox()),
        Modality::Vibration => Detector::Spike(SpikeDetector::vibration()),
        Modality::Sound => {
            let threshold = config.as_ref().and_then(|c| c.threshold).unwrap_or(0.7);
            Detector::Spike(SpikeDetector::sound(threshold))
        }
        Modality::Presence => Detector::Spike(SpikeDetector::presence()),
        Modality::Dryer => Detector::Duty(DutyDetector::dryer()),
    };

    let mut source: Box<dyn SignalSource> = match agent.modality {
        Modality::Mailbox => Box::new(SimulatedBrightness::new()),
        Modality::Vibration | Modality::Dryer => Box::new(SimulatedDrum::cycle(
            Duration::from_secs(30),
            Duration::from_secs(330),
        )),
        Modality::Sound => Box::new(SimulatedMicrophone::new()),
        Modality::Presence => Box::new(SimulatedPickup::new()),
    };

    heartbeat.register().await;

    if !source.is_available() {
        detector.mark_unavailable();
        tracing::warn!(
            "{} capability missing, device stays registered but silent",
            source.name()
        );
        heartbeat.beat(false, Some(detector.status()), 100).await;
        return;
    }

    detector.start();
    let task = agent.modality.use_case_label();
    heartbeat.beat(true, Some(task), 100).await;

    tracing::info!("listening with {} as {}", source.name(), task);

    let started = time::Instant::now();
    let mut sample_tick = time::interval(detector.sample_period());
    let mut heartbeat_tick = time::interval(HEARTBEAT_PERIOD);
    // The registration beat just went out; skip the immediate first tick.
    heartbeat_tick.tick().await;

    loop {
        tokio::select! {
            _ = sample_tick.tick() => {
                let elapsed = started.elapsed();
                let raw = source.sample(elapsed);
                if let Some(event) = detector.on_sample(raw, elapsed) {
                    dispatch(&reporter, agent.modality, event, config.as_ref()).await;
                }
            }
            _ = heartbeat_tick.tick() => {
                heartbeat.beat(true, Some(task), battery_level(started.elapsed())).await;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    detector.stop();
    heartbeat
        .beat(false, None, battery_level(started.elapsed()))
        .await;
    tracing::info!("listening session closed");
}

async fn dispatch(
    reporter: &EventReporter,
    modality: Modality,
    event: DetectorEvent,
    config: Option<&FunctionConfigResponse>,
) {
    let (event_type, phase) = match (modality, event) {
        (Modality::Dryer, DetectorEvent::Started) => (EventType::Dryer, Some(DryerEvent::Started)),
        (Modality::Dryer, DetectorEvent::Finished) => {
            (EventType::Dryer, Some(DryerEvent::Finished))
        }
        (Modality::Dryer, DetectorEvent::Spike) => return,
        _ => (EventType::Mail, None),
    };

    // Saved per-function strings win over the type-derived defaults.
    // Mailbox always reports bare and lets the server fill them in.
    let (title, body) = match (modality, config) {
        (Modality::Mailbox | Modality::Dryer, _) | (_, None) => (None, None),
        (_, Some(config)) => (
            Some(config.notification_title.clone()),
            Some(config.notification_body.clone()),
        ),
    };

    tracing::info!("{} event detected, reporting", modality.function_name());
    reporter.report(event_type, phase, title, body).await;
}
