//! Saturating helpers for bounded signed scalars.
//!
//! Observables such as temperature live in a symmetric range `[-max, max]`.
//! Out-of-range results are clamped to the nearest bound rather than
//! rejected, and `i64` overflow on the way there saturates the same way.

/// Clamp `value` into `[-max, max]`.
///
/// `max` is expected to be non-negative.
#[inline]
pub fn clamp_symmetric(value: i64, max: i64) -> i64 {
    value.clamp(-max, max)
}

/// `value + delta`, clamped into `[-max, max]`.
///
/// If the raw sum overflows `i64`, the result is the bound on the side of
/// `delta`'s sign.
pub fn saturating_offset(value: i64, delta: i64, max: i64) -> i64 {
    match value.checked_add(delta) {
        Some(sum) => clamp_symmetric(sum, max),
        // delta cannot be zero here; zero never overflows
        None => delta.signum() * max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp_symmetric(5, 10), 5);
        assert_eq!(clamp_symmetric(11, 10), 10);
        assert_eq!(clamp_symmetric(-11, 10), -10);
        assert_eq!(clamp_symmetric(i64::MIN, 10), -10);
    }

    #[test]
    fn offset_saturates_on_overflow() {
        assert_eq!(saturating_offset(i64::MAX, 1, 100), 100);
        assert_eq!(saturating_offset(i64::MIN, -1, 100), -100);
        assert_eq!(saturating_offset(-5, 3, 100), -2);
        assert_eq!(saturating_offset(90, 20, 100), 100);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offset_stays_in_range(value in any::<i64>(), delta in any::<i64>(), max in 0_i64..1_000_000) {
            let out = saturating_offset(value, delta, max);
            prop_assert!((-max..=max).contains(&out));
        }
    }
}
