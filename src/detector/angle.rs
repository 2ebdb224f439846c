// Inactivity Detect - Orientation Angle & Range Check

/// Orientation (tilt) angle in degrees of an accumulated acceleration vector:
/// `atan(z / sqrt(x² + y²))`.
///
/// Sums stand in for per-interval medians; for a roughly stationary sensor the
/// sum is proportional to the mean, which leaves the angle unchanged.
///
/// With no horizontal component the ratio is undefined. The vector then
/// points straight along z, so the result is +90° or -90° by the sign of `z`,
/// and 0° when all three sums are zero.
pub fn orientation_angle(x: f64, y: f64, z: f64) -> f64 {
    let horizontal = (x * x + y * y).sqrt();
    if horizontal == 0.0 {
        return if z > 0.0 {
            90.0
        } else if z < 0.0 {
            -90.0
        } else {
            0.0
        };
    }
    (z / horizontal).atan().to_degrees()
}

/// `true` when `max(angles) - min(angles) <= max_diff`.
///
/// Single pass with running min/max; stops at the first angle that pushes the
/// range over the limit. An empty slice is within range.
pub fn within_range(angles: &[f64], max_diff: f64) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &angle in angles {
        min = min.min(angle);
        max = max.max(angle);
        if max - min > max_diff {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn flat_on_table_is_ninety_degrees() {
        assert!((orientation_angle(0.0, 0.0, 1.0) - 90.0).abs() < EPS);
        assert!((orientation_angle(0.0, 0.0, 250.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn upside_down_is_minus_ninety() {
        assert_eq!(orientation_angle(0.0, 0.0, -3.0), -90.0);
    }

    #[test]
    fn zero_vector_is_zero_degrees() {
        assert_eq!(orientation_angle(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn forty_five_degrees_independent_of_scale() {
        assert!((orientation_angle(1.0, 0.0, 1.0) - 45.0).abs() < EPS);
        assert!((orientation_angle(30.0, 40.0, 50.0) - 45.0).abs() < EPS);
        assert!((orientation_angle(-0.6, 0.8, -1.0) + 45.0).abs() < EPS);
    }

    #[test]
    fn horizontal_vector_is_zero_degrees() {
        assert!(orientation_angle(0.0, 9.81, 0.0).abs() < EPS);
    }

    #[test]
    fn range_at_threshold_is_within() {
        assert!(within_range(&[40.0, 45.0, 42.0], 5.0));
    }

    #[test]
    fn range_above_threshold_is_not_within() {
        assert!(!within_range(&[40.0, 46.0, 42.0], 5.0));
        assert!(!within_range(&[0.0, 10.0, 0.0, 10.0], 5.0));
    }

    #[test]
    fn range_is_order_independent() {
        assert!(!within_range(&[46.0, 43.0, 40.5], 5.0));
        assert!(!within_range(&[40.5, 43.0, 46.0], 5.0));
    }

    #[test]
    fn single_and_empty_histories_are_within() {
        assert!(within_range(&[], 5.0));
        assert!(within_range(&[12.0], 5.0));
    }
}
