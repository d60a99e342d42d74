//! Registry error types.

use std::fmt;

use crate::domain::CountryCode;
use crate::source::SourceError;

/// Errors returned by [`EducationRegistry`](super::EducationRegistry) lookups.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationError {
    /// No education levels data exists for the country
    #[error("unsupported country {country}")]
    UnsupportedCountry {
        country: String,
        #[source]
        source: SourceError,
    },

    /// The country's data exists but is malformed
    #[error(
        "education levels data for country {country} is invalid ({reason}); \
         please contact the maintainer of this data"
    )]
    InvalidCountryData {
        country: CountryCode,
        reason: InvalidDataReason,
    },

    /// The data loaded fine but no grade matches the criterion
    #[error("the education level for {criterion} is not defined for country {country}")]
    UndefinedEducationLevel {
        country: CountryCode,
        criterion: Criterion,
    },
}

/// Why a country's data was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDataReason {
    /// The document is not a JSON array
    NotAnArray,
    /// The document has no records
    Empty,
    /// A record lacks a required field (or has it set to null)
    MissingField { index: usize, field: &'static str },
    /// Invalid JSON, or a field of the wrong type
    Malformed { message: String },
}

impl fmt::Display for InvalidDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDataReason::NotAnArray => f.write_str("expected an array of records"),
            InvalidDataReason::Empty => f.write_str("no records"),
            InvalidDataReason::MissingField { index, field } => {
                write!(f, "record {index} is missing required field `{field}`")
            }
            InvalidDataReason::Malformed { message } => f.write_str(message),
        }
    }
}

/// The key a lookup searched by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    GradeLevel(i32),
    GradeName(String),
    GradeShortName(String),
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::GradeLevel(level) => write!(f, "grade level {level}"),
            Criterion::GradeName(name) => write!(f, "grade name {name:?}"),
            Criterion::GradeShortName(name) => write!(f, "grade short name {name:?}"),
        }
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, EducationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fr() -> CountryCode {
        CountryCode::parse("FR").unwrap()
    }

    #[test]
    fn error_display() {
        let err = EducationError::UnsupportedCountry {
            country: "ZZ".into(),
            source: SourceError::NotFound {
                country: CountryCode::parse("ZZ").unwrap(),
                path: PathBuf::from("data/ZZ.json"),
            },
        };
        assert_eq!(err.to_string(), "unsupported country ZZ");
        assert!(std::error::Error::source(&err).is_some());

        let err = EducationError::InvalidCountryData {
            country: fr(),
            reason: InvalidDataReason::MissingField {
                index: 2,
                field: "start_age",
            },
        };
        assert_eq!(
            err.to_string(),
            "education levels data for country FR is invalid \
             (record 2 is missing required field `start_age`); \
             please contact the maintainer of this data"
        );

        let err = EducationError::UndefinedEducationLevel {
            country: fr(),
            criterion: Criterion::GradeLevel(13),
        };
        assert_eq!(
            err.to_string(),
            "the education level for grade level 13 is not defined for country FR"
        );

        let err = EducationError::UndefinedEducationLevel {
            country: fr(),
            criterion: Criterion::GradeShortName("CE3".into()),
        };
        assert_eq!(
            err.to_string(),
            "the education level for grade short name \"CE3\" is not defined for country FR"
        );
    }

    #[test]
    fn reason_display() {
        assert_eq!(InvalidDataReason::Empty.to_string(), "no records");
        assert_eq!(
            InvalidDataReason::NotAnArray.to_string(),
            "expected an array of records"
        );
    }
}
