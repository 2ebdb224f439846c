// Inactivity Detect - Detection Task
//
// Owns the detector for one session: starts it, feeds every sample from the
// sensor channel in arrival order, and stops it when the source goes away.
// Classification changes are forwarded to `event_tx`.

use std::sync::mpsc::{Receiver, Sender};

use crate::clock::Clock;
use crate::config::DetectionOptions;
use crate::detector::InactivityDetector;
use crate::events::{Inactivity, InactivityEvent, Sample};

pub fn detection_task<C: Clock>(
    clock: C,
    sensor_rx: Receiver<Sample>,
    event_tx: Sender<InactivityEvent>,
    options: &DetectionOptions,
) -> anyhow::Result<Inactivity> {
    log::info!("Detection task started");

    let mut detector = InactivityDetector::new(clock, event_tx);
    detector.start(options)?;

    // Blocks until a sample arrives; ends once the sensor side hangs up.
    for sample in sensor_rx.iter() {
        detector.feed(sample);
    }

    log::warn!("Sensor channel closed - stopping detection");
    detector.stop();
    Ok(detector.is_inactive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::Cell;
    use std::sync::mpsc;

    /// Moves forward by `step` ms on every read.
    struct StepClock {
        now: Cell<u64>,
        step: u64,
    }

    impl Clock for StepClock {
        fn now_ms(&self) -> u64 {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    #[test]
    fn rejects_bad_options_before_consuming() {
        let (_sensor_tx, sensor_rx) = mpsc::channel();
        let (event_tx, _event_rx) = mpsc::channel();
        let result = detection_task(
            ManualClock::new(0),
            sensor_rx,
            event_tx,
            &DetectionOptions::default().number_of_angles(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reports_final_state_when_source_closes() {
        let clock = StepClock {
            now: Cell::new(0),
            step: 11,
        };
        let (sensor_tx, sensor_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        for _ in 0..2 {
            sensor_tx.send(Sample::new(0.0, 0.0, 1.0)).unwrap();
        }
        drop(sensor_tx);

        let options = DetectionOptions::default()
            .averaging_interval(10)
            .number_of_angles(2)
            .emit_events(true);
        let state = detection_task(clock, sensor_rx, event_tx, &options).unwrap();

        assert_eq!(state, Inactivity::Inactive);
        assert_eq!(event_rx.recv().unwrap(), InactivityEvent { inactive: true });
    }
}
