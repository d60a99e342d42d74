//! Lazily loaded, cached education levels per country.
//!
//! A country's records are read from the registry's [`LevelSource`] on the
//! first lookup for that country and kept for the lifetime of the registry.
//! Failed loads are not cached, so a later lookup tries the source again.

mod config;
mod error;
mod parse;


pub use config::RegistryConfig;
pub use error::{Criterion, EducationError, InvalidDataReason, Result};

use std::sync::{Arc, OnceLock};

use moka::sync::Cache;
use tracing::{debug, trace, warn};

use crate::domain::{CountryCode, EducationLevel};
use crate::source::{BundledSource, DirectorySource, LevelSource, SourceError};

use parse::parse_country_levels;

/// A country's records, in source order.
pub type CountryLevels = Arc<Vec<Arc<EducationLevel>>>;

static GLOBAL: OnceLock<EducationRegistry> = OnceLock::new();

/// Education levels lookup, keyed by country code.
///
/// Cloning is cheap; clones share the same cache. Concurrent first lookups
/// of the same country load it once and share the result.
#[derive(Clone)]
pub struct EducationRegistry {
    /// Loaded countries. Entries are never evicted.
    levels: Cache<CountryCode, CountryLevels>,
    source: Arc<dyn LevelSource>,
}

impl EducationRegistry {
    /// Create a registry over the data bundled with the crate.
    pub fn new() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    /// Create a registry configured from the environment.
    ///
    /// See [`RegistryConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_config(&RegistryConfig::from_env())
    }

    /// Create a registry from the given config.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let source: Arc<dyn LevelSource> = match &config.data_dir {
            Some(dir) => Arc::new(DirectorySource::new(dir.clone())),
            None => Arc::new(BundledSource::new()),
        };
        Self::build(source, config.initial_capacity)
    }

    /// Create a registry over a custom source.
    pub fn with_source(source: impl LevelSource + 'static) -> Self {
        Self::build(Arc::new(source), RegistryConfig::default().initial_capacity)
    }

    fn build(source: Arc<dyn LevelSource>, initial_capacity: usize) -> Self {
        let levels = Cache::builder().initial_capacity(initial_capacity).build();
        Self { levels, source }
    }

    /// The process-wide registry, created from the environment on first use.
    ///
    /// Prefer passing an explicit registry around; this exists for callers
    /// that want the flat functions at the crate root.
    pub fn global() -> &'static EducationRegistry {
        GLOBAL.get_or_init(EducationRegistry::from_env)
    }

    /// Return the education levels of a country, loading them on first use.
    ///
    /// The country code is trimmed and uppercased, so `" fr "` and `"FR"`
    /// return the same cached list.
    ///
    /// # Errors
    /// * [`EducationError::UnsupportedCountry`] if there is no data for the country
    /// * [`EducationError::InvalidCountryData`] if the country's data is malformed
    pub fn get_country_education_levels(&self, country_code: &str) -> Result<CountryLevels> {
        let country = normalize_country(country_code)?;
        self.levels_for(country)
    }

    /// Find the education level of a country by its grade level.
    ///
    /// Returns the first record with that level.
    pub fn find_by_grade_level(
        &self,
        country_code: &str,
        grade_level: i32,
    ) -> Result<Arc<EducationLevel>> {
        let country = normalize_country(country_code)?;
        let levels = self.levels_for(country)?;

        levels
            .iter()
            .find(|level| level.grade_level() == grade_level)
            .cloned()
            .ok_or(EducationError::UndefinedEducationLevel {
                country,
                criterion: Criterion::GradeLevel(grade_level),
            })
    }

    /// Find the education level of a country by its grade name, ignoring case.
    pub fn find_by_grade_name(
        &self,
        country_code: &str,
        grade_name: &str,
    ) -> Result<Arc<EducationLevel>> {
        let country = normalize_country(country_code)?;
        let levels = self.levels_for(country)?;
        let needle = grade_name.trim().to_lowercase();

        levels
            .iter()
            .find(|level| level.has_grade_name(&needle))
            .cloned()
            .ok_or_else(|| EducationError::UndefinedEducationLevel {
                country,
                criterion: Criterion::GradeName(grade_name.trim().to_string()),
            })
    }

    /// Find the education level of a country by its grade short name,
    /// ignoring case. Grades without a short name are skipped.
    pub fn find_by_grade_short_name(
        &self,
        country_code: &str,
        grade_short_name: &str,
    ) -> Result<Arc<EducationLevel>> {
        let country = normalize_country(country_code)?;
        let levels = self.levels_for(country)?;
        let needle = grade_short_name.trim().to_lowercase();

        levels
            .iter()
            .find(|level| level.has_grade_short_name(&needle))
            .cloned()
            .ok_or_else(|| EducationError::UndefinedEducationLevel {
                country,
                criterion: Criterion::GradeShortName(grade_short_name.trim().to_string()),
            })
    }

    /// List the countries the registry's source has data for, sorted.
    ///
    /// Does not load any country.
    pub fn supported_countries(&self) -> std::result::Result<Vec<CountryCode>, SourceError> {
        self.source.countries()
    }

    /// Whether a country's levels are already loaded.
    pub fn is_loaded(&self, country_code: &str) -> bool {
        CountryCode::parse(country_code).is_ok_and(|country| self.levels.contains_key(&country))
    }

    fn levels_for(&self, country: CountryCode) -> Result<CountryLevels> {
        if let Some(levels) = self.levels.get(&country) {
            trace!(country = %country, "Education levels cache hit");
            return Ok(levels);
        }

        self.levels
            .try_get_with(country, || self.load(country))
            .map_err(Arc::unwrap_or_clone)
    }

    /// Read and parse a country's data. Called at most once per successful load.
    fn load(&self, country: CountryCode) -> Result<CountryLevels> {
        let text = self
            .source
            .read(country)
            .map_err(|source| EducationError::UnsupportedCountry {
                country: country.to_string(),
                source,
            })?;

        let levels = parse_country_levels(country, &text).map_err(|reason| {
            warn!(
                country = %country,
                reason = %reason,
                "Invalid education levels data"
            );
            EducationError::InvalidCountryData { country, reason }
        })?;

        debug!(
            country = %country,
            levels = levels.len(),
            "Loaded education levels"
        );

        Ok(Arc::new(levels))
    }
}

impl Default for EducationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A code that cannot be normalized cannot have data either.
fn normalize_country(country_code: &str) -> Result<CountryCode> {
    CountryCode::parse(country_code).map_err(|e| EducationError::UnsupportedCountry {
        country: country_code.trim().to_uppercase(),
        source: SourceError::from(e),
    })
}
