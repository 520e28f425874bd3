//! Validated component names.

use crate::error::{IngredientError, IngredientResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Words reserved for prefixes derived from an ingredient's temperature.
pub const DISALLOWED_WORDS: [&str; 2] = ["Heated", "Cooled"];

/// A word inside a multi-word name: capital plus at least one lowercase letter.
static MULTI_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z']+$").unwrap()
});

/// A single-word name: capital plus at least two lowercase letters.
static SINGLE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z']{2,}$").unwrap()
});

/// Immutable ingredient name such as `"Water"` or `"Apple Juice"`.
///
/// Words are separated by single spaces. Ordering is plain string ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Name(String);

impl Name {
    /// Validate and wrap `name`; fails with `InvalidNameFormat`.
    pub fn new(name: impl Into<String>) -> IngredientResult<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            tracing::debug!(%name, "rejected ingredient name");
            Err(IngredientError::InvalidNameFormat { name })
        }
    }

    /// The default ingredient name, `"Water"`.
    pub fn water() -> Self {
        Self("Water".to_string())
    }

    pub fn is_valid(name: &str) -> bool {
        let words: Vec<&str> = name.split(' ').collect();
        let word_re = if words.len() > 1 {
            &*MULTI_WORD_RE
        } else {
            &*SINGLE_WORD_RE
        };
        words
            .iter()
            .all(|word| word_re.is_match(word) && !DISALLOWED_WORDS.contains(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::water()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = IngredientError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl std::str::FromStr for Name {
    type Err = IngredientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
