use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

/// A validated record identifier.
///
/// Identifiers are free-form text, but must contain at least one
/// non-whitespace character. Surrounding whitespace is trimmed on
/// construction, so `" P1 "` and `"P1"` name the same record.
///
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordId(NonEmptyString);

impl RecordId {
    /// Creates a new `RecordId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdError` if the string is empty or contains only
    /// whitespace.
    pub fn new(s: String) -> Result<Self, InvalidIdError> {
        let trimmed = s.trim();
        let value = if trimmed.len() == s.len() {
            s
        } else {
            trimmed.to_string()
        };

        NonEmptyString::new(value)
            .map(Self)
            .map_err(|_| InvalidIdError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for RecordId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for RecordId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when an identifier is empty or blank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid ID: must contain at least one non-whitespace character")]
pub struct InvalidIdError;

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("P1", "P1"; "plain")]
    #[test_case("  P1", "P1"; "leading whitespace")]
    #[test_case("D-07\n", "D-07"; "trailing newline")]
    #[test_case("p1", "p1"; "case is preserved")]
    fn parses_valid_ids(input: &str, expected: &str) {
        let id: RecordId = input.parse().unwrap();
        assert_eq!(id.as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces only")]
    #[test_case("\t\n"; "control whitespace")]
    fn rejects_blank_ids(input: &str) {
        assert_eq!(RecordId::try_from(input), Err(InvalidIdError));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper = RecordId::try_from("P1").unwrap();
        let lower = RecordId::try_from("p1").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::try_from("D1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"D1\"");
    }
}
