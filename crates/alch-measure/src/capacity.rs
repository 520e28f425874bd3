//! Container capacity predicate.

use crate::error::{MeasureError, MeasureResult};
use crate::quantity::Quantity;
use crate::state::State;
use crate::unit::Unit;

/// Capacity of a container: exactly one of a container unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capacity {
    unit: Unit,
}

impl Capacity {
    /// Capacity of a single vessel of `unit`; measures such as `Drop` are
    /// `NotAContainer`.
    pub fn of(unit: Unit) -> MeasureResult<Self> {
        if unit.is_container() {
            Ok(Self { unit })
        } else {
            Err(MeasureError::NotAContainer { unit })
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn quantity(&self) -> Quantity {
        Quantity::one(self.unit)
    }

    /// Whether `quantity` of an ingredient in `state` fits.
    ///
    /// The vessel's unit must be representative for the state, and its value
    /// must be at least the quantity's value.
    pub fn can_hold(&self, state: State, quantity: &Quantity) -> bool {
        state.is_representative(self.unit) && self.quantity() >= *quantity
    }
}
