//! In-memory data source.

use std::collections::BTreeMap;

use crate::domain::CountryCode;

use super::LevelSource;
use super::error::SourceError;

/// Serves country documents held in memory.
///
/// Useful for tests and for callers that embed their own data instead of
/// shipping files.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: BTreeMap<CountryCode, String>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the JSON document for a country.
    pub fn insert(&mut self, country: CountryCode, json: impl Into<String>) {
        self.documents.insert(country, json.into());
    }

    /// Builder-style variant of [`insert`](Self::insert) taking a raw code.
    ///
    /// Invalid codes are ignored.
    pub fn with(mut self, country: &str, json: impl Into<String>) -> Self {
        if let Ok(country) = CountryCode::parse(country) {
            self.insert(country, json);
        }
        self
    }
}

impl LevelSource for StaticSource {
    fn read(&self, country: CountryCode) -> Result<String, SourceError> {
        self.documents
            .get(&country)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                country,
                path: format!("<memory>/{country}").into(),
            })
    }

    fn countries(&self) -> Result<Vec<CountryCode>, SourceError> {
        Ok(self.documents.keys().copied().collect())
    }
}
