//! The closed unit table.

use crate::error::MeasureError;
use alch_core::Rational;
use std::fmt;

const SPOON: Rational = Rational::from_const(1, 1);
const STOREROOM: Rational = Rational::from_const(6300, 1);
const DROP: Rational = Rational::from_const(1, 8);
const VIAL: Rational = Rational::from_const(5, 1);
const BOTTLE: Rational = Rational::from_const(15, 1);
const JUG: Rational = Rational::from_const(105, 1);
const BARREL: Rational = Rational::from_const(1260, 1);
const PINCH: Rational = Rational::from_const(1, 6);
const SACHET: Rational = Rational::from_const(7, 1);
const BOX: Rational = Rational::from_const(42, 1);
const SACK: Rational = Rational::from_const(126, 1);
const CHEST: Rational = Rational::from_const(1260, 1);

/// Measurement unit, valued relative to the Spoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Base unit shared by every state
    Spoon,
    /// Bulk unit shared by every state
    Storeroom,
    Drop,
    Vial,
    Bottle,
    Jug,
    Barrel,
    Pinch,
    Sachet,
    Box,
    Sack,
    Chest,
}

impl Unit {
    /// Canonical unit every value is expressed in.
    pub const BASE: Unit = Unit::Spoon;
    /// Largest aggregate unit, used for coarse reporting.
    pub const BULK: Unit = Unit::Storeroom;

    pub const ALL: [Unit; 12] = [
        Unit::Spoon,
        Unit::Storeroom,
        Unit::Drop,
        Unit::Vial,
        Unit::Bottle,
        Unit::Jug,
        Unit::Barrel,
        Unit::Pinch,
        Unit::Sachet,
        Unit::Box,
        Unit::Sack,
        Unit::Chest,
    ];

    /// Value of one of this unit, in spoons.
    pub const fn value(self) -> Rational {
        match self {
            Unit::Spoon => SPOON,
            Unit::Storeroom => STOREROOM,
            Unit::Drop => DROP,
            Unit::Vial => VIAL,
            Unit::Bottle => BOTTLE,
            Unit::Jug => JUG,
            Unit::Barrel => BARREL,
            Unit::Pinch => PINCH,
            Unit::Sachet => SACHET,
            Unit::Box => BOX,
            Unit::Sack => SACK,
            Unit::Chest => CHEST,
        }
    }

    /// Whether the unit is a holdable vessel.
    ///
    /// Drops, pinches and storerooms are measures only.
    pub const fn is_container(self) -> bool {
        !matches!(self, Unit::Drop | Unit::Pinch | Unit::Storeroom)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Unit::Spoon => "Spoon",
            Unit::Storeroom => "Storeroom",
            Unit::Drop => "Drop",
            Unit::Vial => "Vial",
            Unit::Bottle => "Bottle",
            Unit::Jug => "Jug",
            Unit::Barrel => "Barrel",
            Unit::Pinch => "Pinch",
            Unit::Sachet => "Sachet",
            Unit::Box => "Box",
            Unit::Sack => "Sack",
            Unit::Chest => "Chest",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Unit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SPOON" | "SPOONS" => Ok(Unit::Spoon),
            "STOREROOM" | "STOREROOMS" => Ok(Unit::Storeroom),
            "DROP" | "DROPS" => Ok(Unit::Drop),
            "VIAL" | "VIALS" => Ok(Unit::Vial),
            "BOTTLE" | "BOTTLES" => Ok(Unit::Bottle),
            "JUG" | "JUGS" => Ok(Unit::Jug),
            "BARREL" | "BARRELS" => Ok(Unit::Barrel),
            "PINCH" | "PINCHES" => Ok(Unit::Pinch),
            "SACHET" | "SACHETS" => Ok(Unit::Sachet),
            "BOX" | "BOXES" => Ok(Unit::Box),
            "SACK" | "SACKS" => Ok(Unit::Sack),
            "CHEST" | "CHESTS" => Ok(Unit::Chest),
            _ => Err(MeasureError::UnknownUnit {
                unit: s.trim().to_string(),
            }),
        }
    }
}
