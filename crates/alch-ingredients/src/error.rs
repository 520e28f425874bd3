//! Ingredient errors.

use alch_measure::MeasureError;
use thiserror::Error;

/// Result type for ingredient operations.
pub type IngredientResult<T> = Result<T, IngredientError>;

/// Errors raised while building or renaming ingredients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientError {
    /// Quantity or unit problem (negative amount, unit not valid for state, ...).
    #[error(transparent)]
    Measure(#[from] MeasureError),

    /// Name fails the word grammar or uses a reserved word.
    #[error("Invalid name format: '{name}'")]
    InvalidNameFormat { name: String },

    /// Ingredient type without any component names.
    #[error("An ingredient type needs at least one component name")]
    InvalidComponents,

    /// Special names are reserved for mixtures.
    #[error("Cannot give a special name to pure ingredient type '{type_name}'")]
    IllegalSpecialNameAssignment { type_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alch_measure::{State, Unit};

    #[test]
    fn error_display() {
        let err = IngredientError::InvalidNameFormat {
            name: "Heated".into(),
        };
        assert!(err.to_string().contains("Heated"));

        let err = IngredientError::IllegalSpecialNameAssignment {
            type_name: "Water".into(),
        };
        assert!(err.to_string().contains("Water"));
    }

    #[test]
    fn measure_error_converts() {
        let err: IngredientError = MeasureError::NonRepresentativeUnit {
            state: State::Liquid,
            unit: Unit::Chest,
        }
        .into();
        assert!(matches!(
            err,
            IngredientError::Measure(MeasureError::NonRepresentativeUnit { .. })
        ));
    }
}
