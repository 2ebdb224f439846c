//! Accelerometer inactivity detection.
//!
//! A fixed-memory approximation of the van Hees method: acceleration samples
//! are summed per averaging interval, each interval is reduced to one
//! orientation angle, and a window of angles that stays within
//! `max_diff_angle` degrees is classified as inactive.
//!
//! ```
//! use inactivity_detect::{
//!     DetectionOptions, Inactivity, InactivityDetector, InactivityEvent, Sample, SystemClock,
//! };
//!
//! let sink = |name: &'static str, event: InactivityEvent| println!("{name}: {event:?}");
//! let mut detector = InactivityDetector::new(SystemClock::new(), sink);
//! detector
//!     .start(&DetectionOptions::default().averaging_interval(1000).emit_events(true))
//!     .unwrap();
//! detector.feed(Sample::new(0.0, 0.0, 1.0));
//! assert_eq!(detector.is_inactive(), Inactivity::Unknown);
//! ```

pub mod clock;
pub mod config;
pub mod detector;
pub mod drivers;
pub mod error;
pub mod events;
pub mod tasks;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DetectionOptions, DetectorConfig, EVENT_INACTIVITY_DETECT};
pub use detector::InactivityDetector;
pub use error::{DetectorError, Result};
pub use events::{EventSink, Inactivity, InactivityEvent, Sample};
