//! Country code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code {input:?}: {reason}")]
pub struct InvalidCountryCode {
    input: String,
    reason: &'static str,
}

impl InvalidCountryCode {
    /// The rejected input, as given by the caller.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A normalized 2-letter country code (ISO 3166-1 alpha-2 shape).
///
/// Parsing is lenient about surrounding whitespace and case, so `" fr "`,
/// `"Fr"` and `"FR"` all produce the same code. The stored value is always
/// two uppercase ASCII letters, which also makes it safe to use as a file
/// stem.
///
/// # Examples
///
/// ```
/// use education_levels::domain::CountryCode;
///
/// let fr = CountryCode::parse(" fr ").unwrap();
/// assert_eq!(fr.as_str(), "FR");
///
/// // Wrong length is rejected
/// assert!(CountryCode::parse("FRA").is_err());
///
/// // Only letters are accepted
/// assert!(CountryCode::parse("../").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code, trimming whitespace and uppercasing.
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.trim().as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCountryCode {
                input: s.to_string(),
                reason: "must be exactly 2 letters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidCountryCode {
                input: s.to_string(),
                reason: "must be ASCII letters A-Z",
            });
        }

        Ok(CountryCode([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }

    /// Returns the country code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only uppercase ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
