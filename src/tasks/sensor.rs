// Inactivity Detect - Sensor Task
//
// Reads the accelerometer at ~62.5 Hz and pushes samples into the sensor
// channel for the detection task. Plays the role of the host sample source.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::SENSOR_SAMPLE_INTERVAL_MS;
use crate::drivers::imu::SimulatedImu;
use crate::events::Sample;

/// Runs until `run_for` has elapsed or the receiver is dropped. Returns the
/// number of samples delivered.
pub fn sensor_task(mut imu: SimulatedImu, sensor_tx: Sender<Sample>, run_for: Duration) -> u64 {
    log::info!("Sensor task started");

    let interval = Duration::from_millis(SENSOR_SAMPLE_INTERVAL_MS);
    let started = Instant::now();
    let mut delivered = 0u64;

    while started.elapsed() < run_for {
        let tick_start = Instant::now();

        match imu.read_data() {
            Ok(sample) => {
                if sensor_tx.send(sample).is_err() {
                    log::warn!("Sensor channel closed - exiting sensor task");
                    return delivered;
                }
                delivered += 1;
            }
            Err(e) => {
                log::warn!("IMU read error: {}", e);
            }
        }

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }

    log::info!("Sensor task finished after {} samples", delivered);
    delivered
}
