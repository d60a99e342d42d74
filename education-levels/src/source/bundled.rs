//! Country files shipped with the crate.

use crate::domain::CountryCode;

use super::LevelSource;
use super::error::SourceError;

/// Files under `data/`, embedded at compile time. Kept sorted by code.
const BUNDLED: &[(&str, &str)] = &[
    ("FR", include_str!("../../data/FR.json")),
    ("US", include_str!("../../data/US.json")),
    ("VN", include_str!("../../data/VN.json")),
];

/// The education levels data bundled with this crate.
///
/// This is the default source of [`EducationRegistry`](crate::EducationRegistry).
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    /// Create the bundled source.
    pub fn new() -> Self {
        Self
    }
}

impl LevelSource for BundledSource {
    fn read(&self, country: CountryCode) -> Result<String, SourceError> {
        BUNDLED
            .iter()
            .find(|(code, _)| *code == country.as_str())
            .map(|(_, data)| (*data).to_string())
            .ok_or_else(|| SourceError::NotFound {
                country,
                path: format!("data/{country}.json").into(),
            })
    }

    fn countries(&self) -> Result<Vec<CountryCode>, SourceError> {
        BUNDLED
            .iter()
            .map(|(code, _)| CountryCode::parse(code).map_err(SourceError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_bundled_countries() {
        let countries: Vec<String> = BundledSource
            .countries()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(countries, vec!["FR", "US", "VN"]);
    }

    #[test]
    fn bundled_files_are_json_arrays() {
        for country in BundledSource.countries().unwrap() {
            let text = BundledSource.read(country).unwrap();
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert!(
                value.as_array().is_some_and(|a| !a.is_empty()),
                "{country} should be a non-empty array"
            );
        }
    }

    #[test]
    fn unknown_country_is_not_found() {
        let err = BundledSource
            .read(CountryCode::parse("ZZ").unwrap())
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
