//! Exact quantities.

use crate::error::{MeasureError, MeasureResult};
use crate::unit::Unit;
use alch_core::Rational;
use std::cmp::Ordering;
use std::fmt;

/// A whole, non-negative amount of some unit.
///
/// Equality and ordering go through the Spoon-equivalent value, so
/// `2 Vial == 10 Spoon`. Use [`Quantity::same_representation`] when the
/// literal (amount, unit) pair matters.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawQuantity")
)]
pub struct Quantity {
    amount: i64,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity; negative amounts are `InvalidAmount`.
    pub fn new(amount: i64, unit: Unit) -> MeasureResult<Self> {
        if amount < 0 {
            return Err(MeasureError::InvalidAmount { amount });
        }
        Ok(Self { amount, unit })
    }

    /// Empty quantity of the base unit.
    pub const fn zero() -> Self {
        Self {
            amount: 0,
            unit: Unit::BASE,
        }
    }

    /// Exactly one of `unit`.
    pub const fn one(unit: Unit) -> Self {
        Self { amount: 1, unit }
    }

    /// Rebuild a quantity in `unit` from a spoon value.
    ///
    /// Fails with `InexactConversion` unless the value is a whole number of
    /// `unit`.
    pub fn from_base_value(spoons: Rational, unit: Unit) -> MeasureResult<Self> {
        let amount = spoons.checked_div(unit.value())?;
        if !amount.is_integer() {
            return Err(MeasureError::InexactConversion { spoons, unit });
        }
        Self::new(amount.numerator(), unit)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Spoon-equivalent value: `amount × unit value`.
    pub fn base_value(&self) -> MeasureResult<Rational> {
        Ok(Rational::integer(self.amount).checked_mul(self.unit.value())?)
    }

    /// Storeroom-equivalent value.
    pub fn bulk_value(&self) -> MeasureResult<Rational> {
        self.value_in(Unit::BULK)
    }

    /// Value expressed in an arbitrary unit.
    pub fn value_in(&self, unit: Unit) -> MeasureResult<Rational> {
        Ok(self.base_value()?.checked_div(unit.value())?)
    }

    /// Same value, regardless of how it is written.
    pub fn represents_same_as(&self, other: &Self) -> bool {
        self == other
    }

    /// Same literal amount and unit.
    pub fn same_representation(&self, other: &Self) -> bool {
        self.amount == other.amount && self.unit == other.unit
    }

    /// Base value as a wide fraction, for comparisons that must not fail.
    fn wide_base_value(&self) -> (i128, i128) {
        let value = self.unit.value();
        (
            i128::from(self.amount) * i128::from(value.numerator()),
            i128::from(value.denominator()),
        )
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quantity {}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        // |amount × numerator × denominator| stays far below i128::MAX
        let (a, b) = self.wide_base_value();
        let (c, d) = other.wide_base_value();
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawQuantity {
    amount: i64,
    unit: Unit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuantity> for Quantity {
    type Error = MeasureError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        Quantity::new(raw.amount, raw.unit)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = Unit> {
        prop::sample::select(Unit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn base_value_reconstruction_preserves_value(amount in 0_i64..1_000_000, unit in any_unit()) {
            let original = Quantity::new(amount, unit).unwrap();
            let spoons = original.base_value().unwrap();
            let back = Quantity::from_base_value(spoons, unit).unwrap();
            prop_assert!(back.same_representation(&original));
            if spoons.is_integer() {
                let in_spoons = Quantity::from_base_value(spoons, Unit::Spoon).unwrap();
                prop_assert!(in_spoons.represents_same_as(&original));
            }
        }

        #[test]
        fn ordering_agrees_with_base_value(
            a in 0_i64..1_000_000, ua in any_unit(),
            b in 0_i64..1_000_000, ub in any_unit(),
        ) {
            let x = Quantity::new(a, ua).unwrap();
            let y = Quantity::new(b, ub).unwrap();
            prop_assert_eq!(x.cmp(&y), x.base_value().unwrap().cmp(&y.base_value().unwrap()));
        }
    }
}
