//! Education level records.

use std::fmt;

use serde::Serialize;

use super::CountryCode;

/// One grade of a country's education system.
///
/// Educational stages are subdivisions of formal learning: early childhood
/// education, primary education, secondary education and tertiary
/// education. Each stage is split into grades, one per school year, and
/// every grade has an expected age range. Terms and ages vary between
/// countries, so each country ships its own list of grades.
///
/// Records are only built by the registry's loader and never change once
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationLevel {
    country_code: CountryCode,
    grade_level: i32,
    grade_name: String,
    grade_short_name: Option<String>,
    start_age: u32,
    end_age: u32,
}

impl EducationLevel {
    pub(crate) fn new(
        country_code: CountryCode,
        grade_level: i32,
        grade_name: String,
        grade_short_name: Option<String>,
        start_age: u32,
        end_age: u32,
    ) -> Self {
        Self {
            country_code,
            grade_level,
            grade_name,
            grade_short_name,
            start_age,
            end_age,
        }
    }

    /// The country this grade belongs to.
    pub fn country_code(&self) -> CountryCode {
        self.country_code
    }

    /// The number of the year a pupil has reached in the country's system.
    pub fn grade_level(&self) -> i32 {
        self.grade_level
    }

    /// The full name of the grade, verbatim from the source data.
    pub fn grade_name(&self) -> &str {
        &self.grade_name
    }

    /// The short name of the grade, if it has one.
    pub fn grade_short_name(&self) -> Option<&str> {
        self.grade_short_name.as_deref()
    }

    /// The age at which pupils usually begin this grade.
    pub fn start_age(&self) -> u32 {
        self.start_age
    }

    /// The age at which pupils usually complete this grade.
    pub fn end_age(&self) -> u32 {
        self.end_age
    }

    /// Case-insensitive match on the grade name.
    ///
    /// `needle` must already be trimmed and lowercased.
    pub(crate) fn has_grade_name(&self, needle: &str) -> bool {
        self.grade_name.to_lowercase() == needle
    }

    /// Case-insensitive match on the short name. Grades without a short
    /// name never match.
    ///
    /// `needle` must already be trimmed and lowercased.
    pub(crate) fn has_grade_short_name(&self, needle: &str) -> bool {
        self.grade_short_name
            .as_deref()
            .is_some_and(|short| short.to_lowercase() == needle)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}-{})",
            self.country_code, self.grade_name, self.start_age, self.end_age
        )
    }
}
