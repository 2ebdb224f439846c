// Inactivity Detect - Inactivity Detector
//
// Fixed-memory variant of the van Hees inactivity detection:
//   1. Samples are summed per axis for one averaging interval.
//   2. Each interval is reduced to one orientation angle and the sums reset.
//   3. Once `number_of_angles` angles are collected, the window is inactive
//      if no two angles are further apart than `max_diff_angle`.
//
// The interval is checked only when a sample arrives, so a window lasts the
// averaging interval plus up to one inter-sample gap. If the source stalls,
// the window stays open until the next sample.

pub mod angle;
pub mod history;

use crate::clock::Clock;
use crate::config::{DetectionOptions, DetectorConfig, EVENT_INACTIVITY_DETECT};
use crate::error::{DetectorError, Result};
use crate::events::{EventSink, Inactivity, InactivityEvent, Sample};

use self::history::{Accumulator, AngleHistory};

/// Passive detector driven by [`feed`](Self::feed). Holds no thread and does
/// no locking: the host must deliver samples and lifecycle calls from one
/// execution context.
pub struct InactivityDetector<C, S> {
    clock: C,
    sink: S,
    config: DetectorConfig,
    state: Inactivity,
    running: bool,
    start_averaging_ms: u64,
    accumulator: Accumulator,
    history: AngleHistory,
}

impl<C: Clock, S: EventSink> InactivityDetector<C, S> {
    pub fn new(clock: C, sink: S) -> Self {
        let config = DetectorConfig::default();
        Self {
            clock,
            sink,
            history: AngleHistory::with_capacity(config.number_of_angles),
            config,
            state: Inactivity::Unknown,
            running: false,
            start_averaging_ms: 0,
            accumulator: Accumulator::default(),
        }
    }

    /// Attach to the sample stream.
    ///
    /// `options` overlay the current configuration; options left unset keep
    /// their default (or the value from an earlier session). Nothing changes
    /// when the call fails.
    pub fn start(&mut self, options: &DetectionOptions) -> Result<()> {
        if self.running {
            return Err(DetectorError::AlreadyRunning);
        }
        let config = self.config.merged(options)?;

        self.history.resize(config.number_of_angles);
        self.config = config;
        if let Some(inactive) = options.starting_state {
            self.state = inactive.into();
        }
        self.start_averaging_ms = self.clock.now_ms();
        self.running = true;

        log::info!(
            "Inactivity detection started (interval {} ms, max diff {}°, {} angles, events {})",
            self.config.averaging_interval_ms,
            self.config.max_diff_angle,
            self.config.number_of_angles,
            if self.config.emit_events { "on" } else { "off" },
        );
        Ok(())
    }

    /// Detach from the sample stream. State, history and partial sums are
    /// kept as they are.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Inactivity detection stopped (state {:?})", self.state);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_inactive(&self) -> Inactivity {
        self.state
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Angles collected in the current evaluation window.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume one accelerometer sample. Ignored while stopped.
    ///
    /// Samples with a NaN or infinite component are dropped so that one bad
    /// reading cannot poison a whole window.
    pub fn feed(&mut self, sample: Sample) {
        if !self.running {
            return;
        }
        if !sample.is_finite() {
            log::debug!("Dropping non-finite sample {:?}", sample);
            return;
        }

        self.accumulator.add(sample);

        let now = self.clock.now_ms();
        let window_end = self
            .start_averaging_ms
            .saturating_add(self.config.averaging_interval_ms);
        if now > window_end {
            self.start_averaging_ms = now;
            self.close_window();
        }
    }

    fn close_window(&mut self) {
        let samples = self.accumulator.samples();
        let angle = self.accumulator.take_angle();
        log::trace!("Window closed: {} samples, angle {:.2}°", samples, angle);

        if !self.history.push(angle) {
            return;
        }

        let inactive = self.history.evaluate_and_clear(self.config.max_diff_angle);
        let next = Inactivity::from(inactive);
        log::debug!(
            "Evaluated {} angles: {:?}",
            self.config.number_of_angles,
            next
        );

        if next != self.state {
            log::info!("Inactivity state {:?} -> {:?}", self.state, next);
            if self.config.emit_events {
                self.sink
                    .emit(EVENT_INACTIVITY_DETECT, InactivityEvent { inactive });
            }
        }
        self.state = next;
    }
}
