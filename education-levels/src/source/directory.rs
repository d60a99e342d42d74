//! Directory-backed data source.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::CountryCode;

use super::LevelSource;
use super::error::SourceError;

/// Environment variable naming a directory of country files.
pub const DATA_DIR_ENV: &str = "EDUCATION_LEVELS_DATA_DIR";

/// Default file extension for country files.
const DEFAULT_EXTENSION: &str = "json";

/// Configuration for a directory of country files.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Directory containing one file per country.
    pub dir: PathBuf,
    /// Extension of the country files, without the dot.
    pub extension: String,
}

impl DirectoryConfig {
    /// Create a config for the given directory with the default `json` extension.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set a custom file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Build a config from `EDUCATION_LEVELS_DATA_DIR`, if it is set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(Self::new)
    }
}

/// Reads `{dir}/{CC}.{extension}` files, e.g. `data/FR.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    config: DirectoryConfig,
}

impl DirectorySource {
    /// Create a new directory source with the given config.
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }

    /// Path of the file holding a country's data.
    pub fn path_for(&self, country: CountryCode) -> PathBuf {
        self.config
            .dir
            .join(format!("{}.{}", country, self.config.extension))
    }

    /// Get the data directory.
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }
}

impl LevelSource for DirectorySource {
    fn read(&self, country: CountryCode) -> Result<String, SourceError> {
        let path = self.path_for(country);
        debug!(country = %country, path = %path.display(), "Reading education levels file");

        std::fs::read_to_string(&path).map_err(|e| SourceError::from_io(country, path, e))
    }

    fn countries(&self) -> Result<Vec<CountryCode>, SourceError> {
        let listing_error = |e: std::io::Error| SourceError::Listing {
            path: self.config.dir.clone(),
            source: Arc::new(e),
        };

        let mut countries = Vec::new();
        for entry in std::fs::read_dir(&self.config.dir).map_err(listing_error)? {
            let path = entry.map_err(listing_error)?.path();
            if !path.is_file()
                || path.extension().and_then(|s| s.to_str()) != Some(self.config.extension.as_str())
            {
                continue;
            }

            // Only stems that are already canonical map back to the same file
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Ok(country) = CountryCode::parse(stem)
                && country.as_str() == stem
            {
                countries.push(country);
            }
        }

        countries.sort();
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = DirectoryConfig::new("data");
        assert_eq!(config.dir, PathBuf::from("data"));
        assert_eq!(config.extension, "json");
    }

    #[test]
    fn config_with_extension() {
        let config = DirectoryConfig::new("data").with_extension("levels");
        assert_eq!(config.extension, "levels");
        let source = DirectorySource::new(config);
        assert_eq!(source.path_for(code("fr")), PathBuf::from("data/FR.levels"));
    }

    #[test]
    fn reads_country_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("FR.json"), "[]").unwrap();
        let source = DirectorySource::new(DirectoryConfig::new(dir.path()));

        assert_eq!(source.read(code("FR")).unwrap(), "[]");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(DirectoryConfig::new(dir.path()));

        let err = source.read(code("ZZ")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { country, .. } if country == code("ZZ")));
    }

    #[test]
    fn lists_canonical_country_files() {
        let dir = tempdir().unwrap();
        for name in ["US.json", "FR.json", "fr.json", "README.md", "FRA.json"] {
            std::fs::write(dir.path().join(name), "[]").unwrap();
        }
        std::fs::create_dir(dir.path().join("VN.json")).unwrap();
        let source = DirectorySource::new(DirectoryConfig::new(dir.path()));

        assert_eq!(source.countries().unwrap(), vec![code("FR"), code("US")]);
    }

    #[test]
    fn listing_missing_directory_fails() {
        let source = DirectorySource::new(DirectoryConfig::new("/nonexistent/education/data"));
        assert!(matches!(
            source.countries(),
            Err(SourceError::Listing { .. })
        ));
    }
}
