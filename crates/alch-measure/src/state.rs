//! Physical states and the units that can express them.

use crate::error::{MeasureError, MeasureResult};
use crate::unit::Unit;
use std::fmt;

const POWDER_UNITS: [Unit; 7] = [
    Unit::Pinch,
    Unit::Spoon,
    Unit::Sachet,
    Unit::Box,
    Unit::Sack,
    Unit::Chest,
    Unit::Storeroom,
];

const LIQUID_UNITS: [Unit; 7] = [
    Unit::Drop,
    Unit::Spoon,
    Unit::Vial,
    Unit::Bottle,
    Unit::Jug,
    Unit::Barrel,
    Unit::Storeroom,
];

/// Physical state of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Powder,
    Liquid,
}

impl State {
    pub const ALL: [State; 2] = [State::Powder, State::Liquid];

    /// Units valid for this state, strictly ascending by value.
    ///
    /// Always contains both the base and the bulk unit.
    pub fn representative_units(self) -> &'static [Unit] {
        match self {
            State::Powder => &POWDER_UNITS,
            State::Liquid => &LIQUID_UNITS,
        }
    }

    pub fn is_representative(self, unit: Unit) -> bool {
        self.representative_units().contains(&unit)
    }

    /// Fail with `NonRepresentativeUnit` unless `unit` can express this state.
    pub fn ensure_representative(self, unit: Unit) -> MeasureResult<()> {
        if self.is_representative(unit) {
            Ok(())
        } else {
            tracing::debug!(state = %self, unit = %unit, "unit rejected for state");
            Err(MeasureError::NonRepresentativeUnit { state: self, unit })
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            State::Powder => "Powder",
            State::Liquid => "Liquid",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for State {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POWDER" => Ok(State::Powder),
            "LIQUID" => Ok(State::Liquid),
            _ => Err(MeasureError::UnknownState {
                state: s.trim().to_string(),
            }),
        }
    }
}
