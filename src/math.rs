//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Clamps `value` into `[lo, hi]`. NaN maps to `lo`.
#[must_use]
pub fn clamp(value: Scalar, lo: Scalar, hi: Scalar) -> Scalar {
    if value.is_nan() {
        lo
    } else {
        value.max(lo).min(hi)
    }
}

/// Rounds `value` to the nearest point of the grid `origin + k * step`.
///
/// A non-positive `step` leaves the value untouched.
#[must_use]
pub fn snap_to_step(value: Scalar, origin: Scalar, step: Scalar) -> Scalar {
    if step <= 0.0 {
        return value;
    }
    origin + ((value - origin) / step).round() * step
}

/// Generates samples `start, start + step, ...` up to and including `stop`.
#[must_use]
pub fn arange_inclusive(start: Scalar, stop: Scalar, step: Scalar) -> Vec<Scalar> {
    if step <= 0.0 || stop < start {
        return Vec::new();
    }
    // Slack absorbs rounding when `stop` lies exactly on the grid.
    let count = ((stop - start) / step + 1.0e-9).floor() as usize + 1;
    (0..count).map(|i| start + step * i as Scalar).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn clamp_limits_both_sides() {
        assert_relative_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_relative_eq!(clamp(7.0, 0.0, 1.0), 1.0);
        assert_relative_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_relative_eq!(clamp(Scalar::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn snap_rounds_to_nearest_grid_point() {
        assert_relative_eq!(snap_to_step(12.3, 1.0, 0.5), 12.5);
        assert_relative_eq!(snap_to_step(12.2, 1.0, 0.5), 12.0);
        assert_relative_eq!(snap_to_step(4.0, 1.0, 0.0), 4.0);
    }

    #[test]
    fn arange_includes_reachable_stop() {
        assert_eq!(arange_inclusive(1.0, 5.0, 2.0), vec![1.0, 3.0, 5.0]);
        assert_eq!(arange_inclusive(1.0, 6.0, 2.0), vec![1.0, 3.0, 5.0]);
        assert!(arange_inclusive(2.0, 1.0, 1.0).is_empty());
    }
}
