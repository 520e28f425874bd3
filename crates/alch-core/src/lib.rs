//! alch-core: exact arithmetic foundation for the alchemy mixer.
//!
//! Contains:
//! - rational (exact `i64` fractions, always in lowest terms)
//! - saturating (clamped signed scalars used by bounded observables)
//! - error (shared arithmetic error types)

pub mod error;
pub mod rational;
pub mod saturating;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ArithError, ArithResult, ParseRationalError};
pub use rational::Rational;
pub use saturating::{clamp_symmetric, saturating_offset};
