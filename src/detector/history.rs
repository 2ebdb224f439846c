// Inactivity Detect - Sample Accumulator & Angle History

use crate::events::Sample;

use super::angle::{orientation_angle, within_range};

/// Running per-axis sums of the samples received in the current window.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    sum_x: f64,
    sum_y: f64,
    sum_z: f64,
    samples: u32,
}

impl Accumulator {
    pub fn add(&mut self, sample: Sample) {
        self.sum_x += f64::from(sample.x);
        self.sum_y += f64::from(sample.y);
        self.sum_z += f64::from(sample.z);
        self.samples = self.samples.saturating_add(1);
    }

    /// Number of samples summed since the last reduction.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Reduce the sums to one orientation angle and start over from zero.
    pub fn take_angle(&mut self) -> f64 {
        let angle = orientation_angle(self.sum_x, self.sum_y, self.sum_z);
        *self = Self::default();
        angle
    }
}

/// Bounded, insertion-ordered list of orientation angles.
#[derive(Debug, Clone)]
pub struct AngleHistory {
    angles: Vec<f64>,
    capacity: usize,
}

impl AngleHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            angles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. Partially collected angles are discarded when the
    /// capacity actually changes, since they belong to a different window size.
    pub fn resize(&mut self, capacity: usize) {
        if capacity != self.capacity {
            self.angles = Vec::with_capacity(capacity);
            self.capacity = capacity;
        }
    }

    /// Append an angle. Returns `true` once the history is full.
    pub fn push(&mut self, angle: f64) -> bool {
        debug_assert!(self.angles.len() < self.capacity);
        self.angles.push(angle);
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.angles.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Classify the collected window and clear it for the next one.
    pub fn evaluate_and_clear(&mut self, max_diff_angle: f64) -> bool {
        let inactive = within_range(&self.angles, max_diff_angle);
        self.angles.clear();
        inactive
    }
}
