// Inactivity Detect - Simulated Accelerometer
//
// Stands in for an MPU6050-style part on the host: produces raw big-endian
// accelerometer registers at ±8 g and decodes them the same way a real
// register burst is decoded.

use crate::config::ACCEL_SCALE_8G;
use crate::events::Sample;

/// Bytes in one accelerometer burst (X, Y, Z as big-endian i16).
pub const ACCEL_BURST_LEN: usize = 6;

/// Convert a raw accelerometer burst to g.
pub fn decode_accel(raw: &[u8]) -> anyhow::Result<Sample> {
    anyhow::ensure!(
        raw.len() >= ACCEL_BURST_LEN,
        "short accelerometer burst: {} of {} bytes",
        raw.len(),
        ACCEL_BURST_LEN
    );
    Ok(Sample {
        x: i16::from_be_bytes([raw[0], raw[1]]) as f32 / ACCEL_SCALE_8G,
        y: i16::from_be_bytes([raw[2], raw[3]]) as f32 / ACCEL_SCALE_8G,
        z: i16::from_be_bytes([raw[4], raw[5]]) as f32 / ACCEL_SCALE_8G,
    })
}

fn encode_axis(g: f32) -> [u8; 2] {
    let counts = (g * ACCEL_SCALE_8G)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16;
    counts.to_be_bytes()
}

/// Scripted wearer: lies still for `resting_samples`, then waves the wrist.
pub struct SimulatedImu {
    tick: u32,
    resting_samples: u32,
}

impl SimulatedImu {
    pub fn new(resting_samples: u32) -> Self {
        Self {
            tick: 0,
            resting_samples,
        }
    }

    pub fn is_resting(&self) -> bool {
        self.tick < self.resting_samples
    }

    /// Next raw accelerometer burst.
    pub fn read_raw(&mut self) -> [u8; ACCEL_BURST_LEN] {
        let t = self.tick as f32;
        let (x, y, z) = if self.is_resting() {
            // Flat on a table with a little sensor noise.
            (0.01 * (t * 0.7).sin(), 0.01 * (t * 1.3).cos(), 1.0)
        } else {
            // Tilt swings ±60° roughly once every two seconds at 62.5 Hz.
            let tilt = 60f32.to_radians() * (t * 0.05).sin();
            (tilt.cos(), 0.05 * (t * 0.2).sin(), tilt.sin())
        };
        self.tick = self.tick.wrapping_add(1);

        let mut raw = [0u8; ACCEL_BURST_LEN];
        raw[0..2].copy_from_slice(&encode_axis(x));
        raw[2..4].copy_from_slice(&encode_axis(y));
        raw[4..6].copy_from_slice(&encode_axis(z));
        raw
    }

    pub fn read_data(&mut self) -> anyhow::Result<Sample> {
        decode_accel(&self.read_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one_g_on_z() {
        let sample = decode_accel(&[0x00, 0x00, 0x00, 0x00, 0x10, 0x00]).unwrap();
        assert_eq!(sample, Sample::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn decodes_negative_counts() {
        let sample = decode_accel(&[0xF0, 0x00, 0x08, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(sample, Sample::new(-1.0, 0.5, 0.0));
    }

    #[test]
    fn short_burst_is_an_error() {
        assert!(decode_accel(&[0x00; 4]).is_err());
    }

    #[test]
    fn resting_wearer_reads_about_one_g_on_z() {
        let mut imu = SimulatedImu::new(10);
        for _ in 0..10 {
            let sample = imu.read_data().unwrap();
            assert!((sample.z - 1.0).abs() < 1e-3);
            assert!(sample.x.abs() < 0.02 && sample.y.abs() < 0.02);
        }
        assert!(!imu.is_resting());
    }
}
