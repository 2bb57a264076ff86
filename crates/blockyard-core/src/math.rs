//! Math utilities and helpers.

/// Cubic ease-in-out easing.
///
/// Maps linear progress in `[0, 1]` to a perceptually smoothed value:
/// slow start, fast middle, slow finish. `ease_in_out_cubic(0) == 0`,
/// `ease_in_out_cubic(0.5) == 0.5`, `ease_in_out_cubic(1) == 1`, and the
/// function is non-decreasing over the whole interval.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn easing_endpoints() {
        assert_relative_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_relative_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=1000 {
            let t = i as f32 / 1000.0;
            let eased = ease_in_out_cubic(t);
            assert!(eased >= prev, "easing regressed at t = {t}");
            prev = eased;
        }
    }

    #[test]
    fn easing_stays_in_unit_interval() {
        for i in 0..=100 {
            let eased = ease_in_out_cubic(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&eased));
        }
    }
}
