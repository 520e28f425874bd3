//! Text parsing of quantities.
//!
//! Accepts a whole amount followed by an optional unit name, e.g. `"2 vials"`,
//! `"3Pinch"` or `"12"`. A bare number is read in the base unit.

use crate::error::{MeasureError, MeasureResult};
use crate::quantity::Quantity;
use crate::state::State;
use crate::unit::Unit;

/// Parse a quantity such as `"2 vials"`.
pub fn parse_quantity(raw_text: &str) -> MeasureResult<Quantity> {
    let (amount, unit) = split_amount_and_unit(raw_text)?;
    let unit = if unit.is_empty() {
        Unit::BASE
    } else {
        unit.parse::<Unit>()?
    };
    Quantity::new(amount, unit)
}

/// Parse a quantity and check its unit against `state`.
pub fn parse_quantity_in(raw_text: &str, state: State) -> MeasureResult<Quantity> {
    let quantity = parse_quantity(raw_text)?;
    state.ensure_representative(quantity.unit())?;
    Ok(quantity)
}

/// Split `"<integer><unit>"` into its parts.
///
/// Examples:
/// - "2 vials" -> (2, "vials")
/// - "3Pinch" -> (3, "Pinch")
/// - "12" -> (12, "")
fn split_amount_and_unit(input: &str) -> MeasureResult<(i64, &str)> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '-' && c != '+')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let unit_part = unit_part.trim();
    let malformed = || MeasureError::Parse {
        input: input.to_string(),
    };

    // unit names are plain words; anything else means a malformed amount
    if !unit_part.chars().all(char::is_alphabetic) {
        return Err(malformed());
    }
    let amount: i64 = num_part.trim().parse().map_err(|_| malformed())?;

    Ok((amount, unit_part))
}
