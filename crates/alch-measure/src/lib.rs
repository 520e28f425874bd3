//! alch-measure: units, physical states and exact quantities.
//!
//! Provides:
//! - The closed unit table (Spoon-relative rational values, container flags)
//! - Physical states and their representative units
//! - Quantities compared by their Spoon-equivalent value
//! - The container capacity predicate
//! - Text parsing of quantities such as `"2 vials"`
//!
//! # Example
//!
//! ```
//! use alch_measure::{Quantity, Unit};
//!
//! let vials = Quantity::new(2, Unit::Vial).unwrap();
//! let spoons = Quantity::new(10, Unit::Spoon).unwrap();
//! assert!(vials.represents_same_as(&spoons));
//! ```

pub mod capacity;
pub mod error;
pub mod parse;
pub mod quantity;
pub mod state;
pub mod unit;

// Re-exports for ergonomics
pub use capacity::Capacity;
pub use error::{MeasureError, MeasureResult};
pub use parse::{parse_quantity, parse_quantity_in};
pub use quantity::Quantity;
pub use state::State;
pub use unit::Unit;
