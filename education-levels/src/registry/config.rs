//! Registry configuration.

use std::path::PathBuf;

use crate::source::DirectoryConfig;

/// Default initial capacity of the per-country cache.
const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for an [`EducationRegistry`](super::EducationRegistry).
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Directory of country files. `None` uses the data bundled with the crate.
    pub data_dir: Option<DirectoryConfig>,

    /// Number of countries the cache is sized for up front.
    pub initial_capacity: usize,
}

impl RegistryConfig {
    /// Create a config using the bundled data.
    pub fn new() -> Self {
        Self {
            data_dir: None,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Read country files from a directory instead of the bundled data.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(DirectoryConfig::new(dir));
        self
    }

    /// Set the initial cache capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Build a config from the environment.
    ///
    /// Uses `EDUCATION_LEVELS_DATA_DIR` as the data directory when set,
    /// otherwise the bundled data.
    pub fn from_env() -> Self {
        Self {
            data_dir: DirectoryConfig::from_env(),
            ..Self::new()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RegistryConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    fn with_data_dir() {
        let config = RegistryConfig::new()
            .with_data_dir("/srv/education")
            .with_initial_capacity(4);
        assert_eq!(
            config.data_dir.map(|d| d.dir),
            Some(PathBuf::from("/srv/education"))
        );
        assert_eq!(config.initial_capacity, 4);
    }
}
