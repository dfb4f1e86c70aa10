//! License plate normalization and validation.
//!
//! Two formats are accepted: the legacy three-letters-four-digits shape and
//! the Mercosul shape (three letters, one digit, one letter, two digits).
//! Plates are canonicalized to uppercase with no separators before any
//! comparison or network call.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

fn legacy_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("valid plate pattern"))
}

fn mercosul_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("valid plate pattern"))
}

/// Strip everything that is not an ASCII letter or digit and uppercase the rest.
///
/// Total and idempotent: `"abc-1234"` and `"ABC1234"` normalize to the same
/// string.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Whether the input normalizes to a plate in either accepted format.
pub fn is_valid(input: &str) -> bool {
    let plate = normalize(input);
    legacy_pattern().is_match(&plate) || mercosul_pattern().is_match(&plate)
}

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("invalid plate {0:?}: expected AAA-1234 or AAA1A23")]
    Invalid(String),
}

/// A validated license plate, always uppercase with no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate(String);

impl Plate {
    /// Normalize and validate raw user input.
    pub fn parse(input: &str) -> Result<Self, PlateError> {
        let normalized = normalize(input);
        if legacy_pattern().is_match(&normalized) || mercosul_pattern().is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(PlateError::Invalid(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
