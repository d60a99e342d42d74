//! Sources of per-country education level data.
//!
//! Each supported country has one JSON document: an array of objects with
//! `grade_level`, `grade_name`, `grade_short_name` (string or null),
//! `start_age` and `end_age`. A source only hands out the raw text; parsing
//! and validation belong to the registry.

mod bundled;
mod directory;
mod error;
mod memory;

pub use bundled::BundledSource;
pub use directory::{DATA_DIR_ENV, DirectoryConfig, DirectorySource};
pub use error::SourceError;
pub use memory::StaticSource;

use crate::domain::CountryCode;

/// A provider of raw education level documents, addressed by country.
pub trait LevelSource: Send + Sync {
    /// Read the JSON document for a country.
    ///
    /// Returns [`SourceError::NotFound`] when the country is not supported.
    fn read(&self, country: CountryCode) -> Result<String, SourceError>;

    /// List the countries this source has data for, sorted.
    fn countries(&self) -> Result<Vec<CountryCode>, SourceError>;
}
