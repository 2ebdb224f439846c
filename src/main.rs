// Inactivity Detect - Host Demo Entry Point
//
// Wires a simulated accelerometer to the inactivity detector:
//   1. Sensor task reads the simulated IMU at ~62.5 Hz into the sensor channel.
//   2. Detection task feeds every sample to the detector.
//   3. The main thread logs each `inactivity_detect` event until both tasks end.
//
// Usage: inactivity-detect ['{"averagingInterval":1000,"numberOfAngles":5}']

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;

use inactivity_detect::config::{DEMO_RUN_MS, EVENT_INACTIVITY_DETECT, SENSOR_SAMPLE_INTERVAL_MS};
use inactivity_detect::drivers::imu::SimulatedImu;
use inactivity_detect::tasks;
use inactivity_detect::{DetectionOptions, SystemClock};

fn main() -> anyhow::Result<()> {
    if std::env::var(env_logger::DEFAULT_FILTER_ENV).is_err() {
        std::env::set_var(env_logger::DEFAULT_FILTER_ENV, "info");
    }
    env_logger::init();
    log::info!("Inactivity detect demo starting");

    let options = match std::env::args().nth(1) {
        Some(json) => DetectionOptions::from_json(&json).context("parsing detection options")?,
        None => demo_options(),
    };

    // ---- Channels ---------------------------------------------------------
    let (sensor_tx, sensor_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    // ---- Spawn tasks ------------------------------------------------------
    // The wearer rests for the first 40% of the run, then starts moving.
    let resting_samples = (DEMO_RUN_MS * 2 / 5 / SENSOR_SAMPLE_INTERVAL_MS) as u32;
    let sensor = thread::Builder::new()
        .name("sensor".into())
        .spawn(move || {
            tasks::sensor::sensor_task(
                SimulatedImu::new(resting_samples),
                sensor_tx,
                Duration::from_millis(DEMO_RUN_MS),
            )
        })?;

    let detection = thread::Builder::new()
        .name("detection".into())
        .spawn(move || {
            tasks::detection::detection_task(SystemClock::new(), sensor_rx, event_tx, &options)
        })?;

    // Ends once the detection task drops its sender.
    for event in event_rx.iter() {
        log::info!(
            "{} {}",
            EVENT_INACTIVITY_DETECT,
            serde_json::to_string(&event)?
        );
    }

    let samples = sensor
        .join()
        .map_err(|_| anyhow::anyhow!("sensor task panicked"))?;
    let state = detection
        .join()
        .map_err(|_| anyhow::anyhow!("detection task panicked"))??;
    log::info!("Demo finished: {} samples, final state {:?}", samples, state);
    Ok(())
}

/// Short windows so a state change shows up within seconds.
fn demo_options() -> DetectionOptions {
    DetectionOptions::default()
        .averaging_interval(1000)
        .max_diff_angle(5.0)
        .number_of_angles(5)
        .emit_events(true)
        .starting_state(false)
}
