//! National education levels lookup.
//!
//! Answers "what is grade N called in country X, and how old are pupils in
//! it?" from per-country data files, loaded on first use and cached.
//!
//! ```
//! use education_levels::EducationRegistry;
//!
//! let registry = EducationRegistry::new();
//! let cp = registry.find_by_grade_short_name("fr", "cp").unwrap();
//! assert_eq!(cp.grade_level(), 1);
//! assert_eq!(cp.start_age(), 6);
//! ```

pub mod domain;
pub mod registry;
pub mod source;

pub use domain::{CountryCode, EducationLevel};
pub use registry::{
    CountryLevels, Criterion, EducationError, EducationRegistry, InvalidDataReason,
    RegistryConfig, Result,
};

use std::sync::Arc;

/// Education levels of a country, from the process-wide registry.
///
/// See [`EducationRegistry::get_country_education_levels`].
pub fn get_country_education_levels(country_code: &str) -> Result<CountryLevels> {
    EducationRegistry::global().get_country_education_levels(country_code)
}

/// See [`EducationRegistry::find_by_grade_level`].
pub fn find_by_grade_level(country_code: &str, grade_level: i32) -> Result<Arc<EducationLevel>> {
    EducationRegistry::global().find_by_grade_level(country_code, grade_level)
}

/// See [`EducationRegistry::find_by_grade_name`].
pub fn find_by_grade_name(country_code: &str, grade_name: &str) -> Result<Arc<EducationLevel>> {
    EducationRegistry::global().find_by_grade_name(country_code, grade_name)
}

/// See [`EducationRegistry::find_by_grade_short_name`].
pub fn find_by_grade_short_name(
    country_code: &str,
    grade_short_name: &str,
) -> Result<Arc<EducationLevel>> {
    EducationRegistry::global().find_by_grade_short_name(country_code, grade_short_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_registry_is_shared() {
        let first = get_country_education_levels("US").unwrap();
        let second = get_country_education_levels(" us").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(EducationRegistry::global().is_loaded("US"));
    }

    #[test]
    fn free_functions_delegate() {
        assert_eq!(find_by_grade_level("FR", 12).unwrap().grade_short_name(), Some("Tle"));
        assert_eq!(find_by_grade_name("us", "kindergarten").unwrap().grade_level(), 0);
        assert_eq!(find_by_grade_short_name("US", "12TH").unwrap().end_age(), 18);
        assert!(matches!(
            find_by_grade_level("ZZ", 1),
            Err(EducationError::UnsupportedCountry { .. })
        ));
    }
}
