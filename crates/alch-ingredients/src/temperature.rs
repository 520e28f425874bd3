//! Saturating temperature.
//!
//! A temperature is one signed value in `[-MAX_VALUE, MAX_VALUE]`: positive
//! is hotness, negative is coldness. Inputs outside the range are clamped,
//! never rejected, and `i64` overflow saturates to the bound on the side of
//! the change.

use alch_core::{clamp_symmetric, saturating_offset};
use std::fmt;

/// Temperature as a `(coldness, hotness)` pair of which at most one is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i64", into = "i64")
)]
pub struct Temperature(i64);

impl Temperature {
    pub const MAX_VALUE: i64 = 10_000;

    pub const ZERO: Self = Self(0);

    /// Net temperature `hotness - coldness`, clamped into range.
    ///
    /// Any pair is accepted: a pair with both parts non-zero is read as one
    /// part heating or cooling the other.
    pub fn new(coldness: i64, hotness: i64) -> Self {
        match hotness.checked_sub(coldness) {
            Some(net) => Self::from_value(net),
            None => {
                let bound = if hotness > coldness {
                    Self::MAX_VALUE
                } else {
                    -Self::MAX_VALUE
                };
                tracing::trace!(coldness, hotness, bound, "temperature saturated");
                Self(bound)
            }
        }
    }

    /// Signed value (positive is hot), clamped into range.
    pub fn from_value(value: i64) -> Self {
        Self(clamp_symmetric(value, Self::MAX_VALUE))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn coldness(self) -> i64 {
        (-self.0).max(0)
    }

    pub fn hotness(self) -> i64 {
        self.0.max(0)
    }

    /// `(coldness, hotness)`.
    pub fn as_pair(self) -> (i64, i64) {
        (self.coldness(), self.hotness())
    }

    /// Heat by `amount`; negative amounts count as zero.
    pub fn heat(self, amount: i64) -> Self {
        self.offset(amount.max(0))
    }

    /// Cool by `amount`; negative amounts count as zero.
    pub fn cool(self, amount: i64) -> Self {
        // clamped amount is non-negative, so negation cannot overflow
        self.offset(-(amount.max(0)))
    }

    fn offset(self, delta: i64) -> Self {
        let next = saturating_offset(self.0, delta, Self::MAX_VALUE);
        if next.abs() == Self::MAX_VALUE && next != self.0 {
            tracing::trace!(from = self.0, delta, to = next, "temperature at bound");
        }
        Self(next)
    }
}

impl From<i64> for Temperature {
    fn from(value: i64) -> Self {
        Self::from_value(value)
    }
}

impl From<Temperature> for i64 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.coldness(), self.hotness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_collapses_to_net_value() {
        assert_eq!(Temperature::new(0, 20).as_pair(), (0, 20));
        assert_eq!(Temperature::new(30, 0).as_pair(), (30, 0));
        assert_eq!(Temperature::new(5, 20).as_pair(), (0, 15));
        assert_eq!(Temperature::new(20, 5).as_pair(), (15, 0));
    }

    #[test]
    fn construction_clamps() {
        assert_eq!(Temperature::new(0, 50_000).hotness(), Temperature::MAX_VALUE);
        assert_eq!(Temperature::new(50_000, 0).coldness(), Temperature::MAX_VALUE);
    }

    #[test]
    fn construction_saturates_on_overflow() {
        assert_eq!(Temperature::new(i64::MIN, i64::MAX).hotness(), 10_000);
        assert_eq!(Temperature::new(i64::MAX, i64::MIN).coldness(), 10_000);
    }

    #[test]
    fn heat_saturates_at_max() {
        let t = Temperature::new(0, 0).heat(15_000);
        assert_eq!(t.hotness(), 10_000);
        assert_eq!(t.coldness(), 0);
        assert_eq!(Temperature::new(0, 9_000).heat(i64::MAX).hotness(), 10_000);
    }

    #[test]
    fn cool_crosses_zero() {
        let t = Temperature::new(0, 20).cool(25);
        assert_eq!(t.coldness(), 5);
        assert_eq!(t.hotness(), 0);
    }

    #[test]
    fn cool_saturates_at_min() {
        assert_eq!(Temperature::new(9_000, 0).cool(i64::MAX).coldness(), 10_000);
    }

    #[test]
    fn negative_amounts_are_ignored() {
        let t = Temperature::new(0, 20);
        assert_eq!(t.heat(-5), t);
        assert_eq!(t.cool(-5), t);
        assert_eq!(t.cool(i64::MIN), t);
    }

    #[test]
    fn zero_change_is_identity() {
        let t = Temperature::new(40, 0);
        assert_eq!(t.heat(0), t);
        assert_eq!(t.cool(0), t);
    }

    #[test]
    fn ordered_by_signed_value() {
        assert!(Temperature::new(10, 0) < Temperature::ZERO);
        assert!(Temperature::new(0, 1) > Temperature::ZERO);
        assert!(Temperature::new(0, 20) < Temperature::new(0, 21));
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::new(0, 20).to_string(), "[0, 20]");
        assert_eq!(Temperature::new(7, 0).to_string(), "[7, 0]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_clamps_on_read() {
        assert_eq!(serde_json::to_string(&Temperature::new(3, 0)).unwrap(), "-3");
        let t: Temperature = serde_json::from_str("99999").unwrap();
        assert_eq!(t.hotness(), Temperature::MAX_VALUE);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_both_cold_and_hot(
            coldness in any::<i64>(),
            hotness in any::<i64>(),
            heat in any::<i64>(),
            cool in any::<i64>(),
        ) {
            let t = Temperature::new(coldness, hotness).heat(heat).cool(cool);
            prop_assert_eq!(t.coldness().min(t.hotness()), 0);
            prop_assert!(t.coldness() <= Temperature::MAX_VALUE);
            prop_assert!(t.hotness() <= Temperature::MAX_VALUE);
        }

        #[test]
        fn heating_never_cools(value in -10_000_i64..=10_000, amount in any::<i64>()) {
            let t = Temperature::from_value(value);
            prop_assert!(t.heat(amount) >= t);
            prop_assert!(t.cool(amount) <= t);
        }
    }
}
