//! Parsing country documents into education level records.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{CountryCode, EducationLevel};

use super::error::InvalidDataReason;

/// One record as found in a country document.
///
/// Every field is optional here so that a missing required field can be
/// reported by name instead of as a generic deserialization error.
#[derive(Debug, Deserialize)]
struct RawEducationLevel {
    grade_level: Option<i32>,
    grade_name: Option<String>,
    grade_short_name: Option<String>,
    start_age: Option<u32>,
    end_age: Option<u32>,
}

impl RawEducationLevel {
    fn into_level(
        self,
        country: CountryCode,
        index: usize,
    ) -> Result<EducationLevel, InvalidDataReason> {
        let missing = |field| InvalidDataReason::MissingField { index, field };

        let grade_level = self.grade_level.ok_or_else(|| missing("grade_level"))?;
        let grade_name = self.grade_name.ok_or_else(|| missing("grade_name"))?;
        let start_age = self.start_age.ok_or_else(|| missing("start_age"))?;
        let end_age = self.end_age.ok_or_else(|| missing("end_age"))?;

        // An empty short name means the grade has none
        let grade_short_name = self.grade_short_name.filter(|s| !s.is_empty());

        Ok(EducationLevel::new(
            country,
            grade_level,
            grade_name,
            grade_short_name,
            start_age,
            end_age,
        ))
    }
}

/// Parse a country's JSON document into records, in document order.
///
/// Either every record is valid or the whole document is rejected.
pub(crate) fn parse_country_levels(
    country: CountryCode,
    text: &str,
) -> Result<Vec<Arc<EducationLevel>>, InvalidDataReason> {
    let document: Value = serde_json::from_str(text).map_err(|e| InvalidDataReason::Malformed {
        message: format!("invalid JSON: {e}"),
    })?;

    let items = document.as_array().ok_or(InvalidDataReason::NotAnArray)?;
    if items.is_empty() {
        return Err(InvalidDataReason::Empty);
    }

    let mut levels = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let raw = RawEducationLevel::deserialize(item).map_err(|e| {
            InvalidDataReason::Malformed {
                message: format!("record {index}: {e}"),
            }
        })?;

        levels.push(Arc::new(raw.into_level(country, index)?));
    }

    warn_duplicate_levels(country, &levels);

    Ok(levels)
}

/// Lookups by grade level return the first match, so later duplicates are
/// unreachable. Worth telling the data maintainer about.
fn warn_duplicate_levels(country: CountryCode, levels: &[Arc<EducationLevel>]) {
    let mut seen = HashSet::new();
    for level in levels {
        if !seen.insert(level.grade_level()) {
            warn!(
                country = %country,
                grade_level = level.grade_level(),
                grade_name = level.grade_name(),
                "Duplicate grade level; only the first record is reachable by level"
            );
        }
    }
}
