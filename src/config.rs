// Inactivity Detect - Detection & Host Configuration

use serde::Deserialize;

use crate::error::{DetectorError, Result};

// ---------------------------------------------------------------------------
// Detection defaults
// ---------------------------------------------------------------------------
pub const DEFAULT_AVERAGING_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_MAX_DIFF_ANGLE: f64 = 5.0; // degrees
pub const DEFAULT_NUMBER_OF_ANGLES: usize =
    (60_000 / DEFAULT_AVERAGING_INTERVAL_MS as usize) * 5; // 5 minutes of angles

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------
pub const EVENT_INACTIVITY_DETECT: &str = "inactivity_detect";

// ---------------------------------------------------------------------------
// Simulated host (demo binary)
// ---------------------------------------------------------------------------
pub const SENSOR_SAMPLE_INTERVAL_MS: u64 = 16; // ~62.5 Hz
pub const ACCEL_SCALE_8G: f32 = 4096.0; // LSB/g at ±8 g
pub const DEMO_RUN_MS: u64 = 20_000;

/// Validated detector parameters. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Length of one accumulation window (ms).
    pub averaging_interval_ms: u64,
    /// Largest angle range (degrees) still classified as inactive.
    pub max_diff_angle: f64,
    /// Angles collected before each classification.
    pub number_of_angles: usize,
    /// Notify the sink when the classification changes.
    pub emit_events: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            averaging_interval_ms: DEFAULT_AVERAGING_INTERVAL_MS,
            max_diff_angle: DEFAULT_MAX_DIFF_ANGLE,
            number_of_angles: DEFAULT_NUMBER_OF_ANGLES,
            emit_events: false,
        }
    }
}

impl DetectorConfig {
    /// Overlay `options` on top of `self`. Options left as `None` keep their
    /// current value. The result is validated before it is returned.
    pub fn merged(&self, options: &DetectionOptions) -> Result<Self> {
        let merged = Self {
            averaging_interval_ms: options
                .averaging_interval
                .unwrap_or(self.averaging_interval_ms),
            max_diff_angle: options.max_diff_angle.unwrap_or(self.max_diff_angle),
            number_of_angles: options.number_of_angles.unwrap_or(self.number_of_angles),
            emit_events: options.emit_events.unwrap_or(self.emit_events),
        };
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> Result<()> {
        if self.averaging_interval_ms == 0 {
            return Err(DetectorError::configuration(
                "averagingInterval",
                "must be a positive number of milliseconds",
            ));
        }
        if !self.max_diff_angle.is_finite() || self.max_diff_angle <= 0.0 {
            return Err(DetectorError::configuration(
                "maxDiffAngle",
                "must be a positive, finite angle in degrees",
            ));
        }
        if self.number_of_angles == 0 {
            return Err(DetectorError::configuration(
                "numberOfAngles",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Options passed to `start`. Every field is optional.
///
/// Deserializes from the camelCase option object used by host scripts:
///
/// ```json
/// { "averagingInterval": 1000, "maxDiffAngle": 5, "numberOfAngles": 5,
///   "emitEvents": true, "startingState": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DetectionOptions {
    pub averaging_interval: Option<u64>,
    pub max_diff_angle: Option<f64>,
    pub number_of_angles: Option<usize>,
    pub emit_events: Option<bool>,
    /// Seeds the recorded classification before the first evaluation.
    pub starting_state: Option<bool>,
}

impl DetectionOptions {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn averaging_interval(mut self, ms: u64) -> Self {
        self.averaging_interval = Some(ms);
        self
    }

    pub fn max_diff_angle(mut self, degrees: f64) -> Self {
        self.max_diff_angle = Some(degrees);
        self
    }

    pub fn number_of_angles(mut self, count: usize) -> Self {
        self.number_of_angles = Some(count);
        self
    }

    pub fn emit_events(mut self, emit: bool) -> Self {
        self.emit_events = Some(emit);
        self
    }

    pub fn starting_state(mut self, inactive: bool) -> Self {
        self.starting_state = Some(inactive);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_five_minutes_of_five_second_windows() {
        let config = DetectorConfig::default();
        assert_eq!(config.averaging_interval_ms, 5000);
        assert_eq!(config.max_diff_angle, 5.0);
        assert_eq!(config.number_of_angles, 60);
        assert!(!config.emit_events);
    }

    #[test]
    fn unspecified_options_keep_previous_values() {
        let previous = DetectorConfig {
            averaging_interval_ms: 1000,
            max_diff_angle: 3.0,
            number_of_angles: 7,
            emit_events: true,
        };
        let merged = previous
            .merged(&DetectionOptions::default().max_diff_angle(8.0))
            .unwrap();
        assert_eq!(merged.averaging_interval_ms, 1000);
        assert_eq!(merged.max_diff_angle, 8.0);
        assert_eq!(merged.number_of_angles, 7);
        assert!(merged.emit_events);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = DetectorConfig::default()
            .merged(&DetectionOptions::default().averaging_interval(0))
            .unwrap_err();
        assert!(matches!(
            err,
            DetectorError::Configuration { option: "averagingInterval", .. }
        ));
    }

    #[test]
    fn zero_angle_count_is_rejected() {
        let err = DetectorConfig::default()
            .merged(&DetectionOptions::default().number_of_angles(0))
            .unwrap_err();
        assert!(matches!(
            err,
            DetectorError::Configuration { option: "numberOfAngles", .. }
        ));
    }

    #[test]
    fn non_positive_or_nan_max_angle_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result =
                DetectorConfig::default().merged(&DetectionOptions::default().max_diff_angle(bad));
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn options_parse_from_camel_case_json() {
        let options = DetectionOptions::from_json(
            r#"{"averagingInterval":1000,"maxDiffAngle":5,"numberOfAngles":5,
                "emitEvents":true,"startingState":false}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            DetectionOptions::default()
                .averaging_interval(1000)
                .max_diff_angle(5.0)
                .number_of_angles(5)
                .emit_events(true)
                .starting_state(false)
        );
    }

    #[test]
    fn unknown_option_is_a_parse_error() {
        assert!(DetectionOptions::from_json(r#"{"averagingIntervall":1000}"#).is_err());
    }

    #[test]
    fn empty_json_object_is_all_defaults() {
        assert_eq!(
            DetectionOptions::from_json("{}").unwrap(),
            DetectionOptions::default()
        );
    }
}
