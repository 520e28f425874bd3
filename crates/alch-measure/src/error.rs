//! Measurement errors.

use crate::state::State;
use crate::unit::Unit;
use alch_core::{ArithError, Rational};
use thiserror::Error;

/// Result type for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur while building or converting quantities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// Exact arithmetic failed (division by zero, overflow).
    #[error(transparent)]
    Arith(#[from] ArithError),

    /// Negative amount for a quantity.
    #[error("Invalid amount {amount}: quantities cannot be negative")]
    InvalidAmount { amount: i64 },

    /// Unit cannot express quantities in the given state.
    #[error("{unit} is not a representative unit for {state}")]
    NonRepresentativeUnit { state: State, unit: Unit },

    /// Unit is a measure, not a vessel.
    #[error("{unit} is not a container unit")]
    NotAContainer { unit: Unit },

    /// Value is not a whole, non-negative number of the target unit.
    #[error("{spoons} spoons is not a whole number of {unit}")]
    InexactConversion { spoons: Rational, unit: Unit },

    /// Unit name not in the unit table.
    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    /// State name not recognized.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// Input text did not parse to an amount and a unit.
    #[error("Could not parse quantity from '{input}'")]
    Parse { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeasureError::NonRepresentativeUnit {
            state: State::Powder,
            unit: Unit::Vial,
        };
        assert_eq!(err.to_string(), "Vial is not a representative unit for Powder");

        let err = MeasureError::InvalidAmount { amount: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn arith_error_is_transparent() {
        let err: MeasureError = ArithError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Division by zero");
    }
}
