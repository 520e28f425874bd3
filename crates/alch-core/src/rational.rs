//! Exact rational numbers.
//!
//! A [`Rational`] is an `i64` numerator over a positive `i64` denominator,
//! always reduced to lowest terms. Arithmetic is checked: intermediate
//! cross-products are formed in `i128`, reduced, and only then narrowed back
//! to `i64`. A result that still does not fit is reported as
//! [`ArithError::ArithmeticOverflow`] instead of wrapping.
//!
//! # Example
//!
//! ```
//! use alch_core::Rational;
//!
//! let third = Rational::new(1, 3).unwrap();
//! let sixth = Rational::new(1, 6).unwrap();
//! assert_eq!(third.checked_add(sixth).unwrap(), Rational::new(1, 2).unwrap());
//! ```

use crate::error::{ArithError, ArithResult, ParseRationalError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Exact fraction in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Create a normalized rational.
    ///
    /// Fails with `DivisionByZero` when `den == 0`, and with
    /// `ArithmeticOverflow` when the normalized form is not representable
    /// (only `i64::MIN` paired with a negative denominator can do that).
    pub fn new(num: i64, den: i64) -> ArithResult<Self> {
        Self::reduce(i128::from(num), i128::from(den), "normalize")
    }

    /// Whole number `n/1`.
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Compile-time constructor for static tables.
    ///
    /// Panics during const evaluation if `den` is not positive.
    pub const fn from_const(num: i64, den: i64) -> Self {
        assert!(den > 0, "rational table entries need a positive denominator");
        let g = gcd_u64(num.unsigned_abs(), den.unsigned_abs()) as i64;
        Self {
            num: num / g,
            den: den / g,
        }
    }

    pub const fn numerator(self) -> i64 {
        self.num
    }

    pub const fn denominator(self) -> i64 {
        self.den
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Sign of the value: -1, 0 or 1.
    pub const fn signum(self) -> i64 {
        self.num.signum()
    }

    /// Integer part, truncated toward zero.
    pub const fn trunc(self) -> i64 {
        self.num / self.den
    }

    /// Lossy floating point view.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub fn checked_add(self, other: Self) -> ArithResult<Self> {
        let (a, b) = (i128::from(self.num), i128::from(self.den));
        let (c, d) = (i128::from(other.num), i128::from(other.den));
        let num = (a * d)
            .checked_add(b * c)
            .ok_or(ArithError::ArithmeticOverflow { op: "add" })?;
        Self::reduce(num, b * d, "add")
    }

    pub fn checked_sub(self, other: Self) -> ArithResult<Self> {
        let (a, b) = (i128::from(self.num), i128::from(self.den));
        let (c, d) = (i128::from(other.num), i128::from(other.den));
        let num = (a * d)
            .checked_sub(b * c)
            .ok_or(ArithError::ArithmeticOverflow { op: "subtract" })?;
        Self::reduce(num, b * d, "subtract")
    }

    pub fn checked_mul(self, other: Self) -> ArithResult<Self> {
        let num = i128::from(self.num) * i128::from(other.num);
        let den = i128::from(self.den) * i128::from(other.den);
        Self::reduce(num, den, "multiply")
    }

    /// Divide by `other`; dividing by a zero-valued rational is `DivisionByZero`.
    pub fn checked_div(self, other: Self) -> ArithResult<Self> {
        if other.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let num = i128::from(self.num) * i128::from(other.den);
        let den = i128::from(self.den) * i128::from(other.num);
        Self::reduce(num, den, "divide")
    }

    /// Reduce a wide fraction and narrow it back to `i64`.
    fn reduce(num: i128, den: i128, op: &'static str) -> ArithResult<Self> {
        if den == 0 {
            return Err(ArithError::DivisionByZero);
        }
        let overflow = ArithError::ArithmeticOverflow { op };

        // gcd of the magnitudes divides both exactly; it is at least 1 here
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
        let g = i128::try_from(g).map_err(|_| overflow)?;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = num.checked_neg().ok_or(overflow)?;
            den = den.checked_neg().ok_or(overflow)?;
        }

        Ok(Self {
            num: i64::try_from(num).map_err(|_| overflow)?,
            den: i64::try_from(den).map_err(|_| overflow)?,
        })
    }
}

const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, and i64 * i64 always fits in i128.
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts `"n"` or `"n/d"`, with optional whitespace around the parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRationalError::Malformed {
            input: s.to_string(),
        };
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s.trim(), "1"),
        };
        let num: i64 = num.parse().map_err(|_| malformed())?;
        let den: i64 = den.parse().map_err(|_| malformed())?;
        Ok(Self::new(num, den)?)
    }
}

impl TryFrom<String> for Rational {
    type Error = ParseRationalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rational> for String {
    fn from(r: Rational) -> Self {
        r.to_string()
    }
}
