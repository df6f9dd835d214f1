//! Error types for the keyed Bloom filter
//!
//! Only construction can fail. `insert`, `query` and `query_and_insert` are
//! total over any byte sequence once a filter exists.

use thiserror::Error;

/// Errors that can occur while configuring or constructing a filter
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Bitmap size overflows the bit-count domain: {bytes} bytes * 8")]
    SizeOverflow { bytes: usize },

    #[error("Failed to allocate bitmap of {bytes} bytes")]
    AllocationFailed { bytes: usize },

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::ConfigParse(err.to_string())
    }
}

/// Convenience alias for results in this crate
pub type FilterResult<T> = Result<T, FilterError>;
