//! Data source error types.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{CountryCode, InvalidCountryCode};

/// Errors that can occur when reading education level data.
///
/// Cloneable so that one failed load can be reported to every caller that
/// was waiting on it; I/O errors are shared behind an `Arc`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// Country code is not a valid 2-letter code
    #[error(transparent)]
    InvalidCode(#[from] InvalidCountryCode),

    /// No data exists for the country
    #[error("no education levels data for {country} at {}", .path.display())]
    NotFound { country: CountryCode, path: PathBuf },

    /// Data exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        country: CountryCode,
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Listing the available countries failed
    #[error("failed to list {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl SourceError {
    /// Classify an I/O error raised while reading a country's file.
    pub(crate) fn from_io(country: CountryCode, path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound { country, path }
        } else {
            SourceError::Io {
                country,
                path,
                source: Arc::new(err),
            }
        }
    }
}
