//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use keyed_bloom::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(10_000)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//! assert!(config.bitmap_bytes > 0);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{bit_count_for, compute_bitmap_size};
use crate::error::{FilterError, FilterResult};

/// Construction parameters for a [`crate::BloomFilter`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Bitmap size in bytes
    pub bitmap_bytes: usize,
    /// Expected number of distinct items (n)
    pub expected_items: usize,
    /// Target false positive rate the size was derived from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_fpr: Option<f64>,
}

impl BloomConfig {
    /// Size a config for `expected_items` at `target_fpr`
    pub fn for_accuracy(expected_items: usize, target_fpr: f64) -> FilterResult<Self> {
        BloomConfigBuilder::new()
            .expected_items(expected_items)
            .target_fpr(target_fpr)
            .build()
    }

    /// Parse and validate a JSON config
    ///
    /// ```
    /// use keyed_bloom::BloomConfig;
    ///
    /// let config = BloomConfig::from_json(r#"{"bitmap_bytes": 1024, "expected_items": 500}"#).unwrap();
    /// assert_eq!(config.bitmap_bytes, 1024);
    /// ```
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> FilterResult<()> {
        if let Some(fpr) = self.target_fpr {
            validate_fpr(fpr)?;
        }

        if bit_count_for(self.bitmap_bytes).is_none() {
            return Err(FilterError::SizeOverflow {
                bytes: self.bitmap_bytes,
            });
        }

        Ok(())
    }
}

fn validate_fpr(fpr: f64) -> FilterResult<()> {
    // Also rejects NaN
    if !(fpr > 0.0 && fpr < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate { fpr });
    }
    Ok(())
}

/// Builder for BloomConfig with validation
///
/// Either give `expected_items` + `target_fpr` and let the builder size the
/// bitmap, or pin the size with `bitmap_bytes`. An explicit size wins.
#[derive(Default)]
pub struct BloomConfigBuilder {
    bitmap_bytes: Option<usize>,
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit bitmap size in bytes
    pub fn bitmap_bytes(mut self, bytes: usize) -> Self {
        self.bitmap_bytes = Some(bytes);
        self
    }

    /// Set expected number of items
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set target false positive rate (strictly between 0 and 1)
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> FilterResult<BloomConfig> {
        let expected_items = self.expected_items.ok_or_else(|| {
            FilterError::InvalidParameters("expected_items is required".to_string())
        })?;

        if let Some(fpr) = self.target_fpr {
            validate_fpr(fpr)?;
        }

        let bitmap_bytes = match (self.bitmap_bytes, self.target_fpr) {
            (Some(bytes), _) => bytes,
            (None, Some(fpr)) => compute_bitmap_size(expected_items, fpr),
            (None, None) => {
                return Err(FilterError::InvalidParameters(
                    "either bitmap_bytes or target_fpr must be set".to_string(),
                ))
            }
        };

        let config = BloomConfig {
            bitmap_bytes,
            expected_items,
            target_fpr: self.target_fpr,
        };
        config.validate()?;
        Ok(config)
    }
}
