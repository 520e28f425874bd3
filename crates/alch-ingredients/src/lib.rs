//! alch-ingredients: ingredient types, names and temperatures.
//!
//! Provides:
//! - Saturating temperatures in `[-10000, 10000]`
//! - Validated component names
//! - Ingredient types (pure or mixtures) and their naming rules
//! - Ingredient instances carrying a quantity and a live temperature
//!
//! # Example
//!
//! ```
//! use alch_ingredients::{IngredientType, Name, Temperature};
//! use alch_measure::State;
//!
//! let mint = Name::new("Mint").unwrap();
//! let ty = IngredientType::new(vec![Name::water(), mint], State::Liquid, Temperature::new(0, 20))
//!     .unwrap();
//! assert_eq!(ty.simple_name(), "Mint mixed with Water");
//! ```

pub mod error;
pub mod ingredient;
pub mod ingredient_type;
pub mod name;
pub mod temperature;

// Re-exports for ergonomics
pub use error::{IngredientError, IngredientResult};
pub use ingredient::AlchemicalIngredient;
pub use ingredient_type::IngredientType;
pub use name::Name;
pub use temperature::Temperature;
