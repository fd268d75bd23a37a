//! Sizing math and configuration for Bloom filters

use crate::{BloomError, Result};
use std::f64::consts::LN_2;

/// Derived sizing of a Bloom filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParameters {
    /// Length of the bit array (m)
    pub num_bits: usize,
    /// Number of bit positions derived per item (k)
    pub num_hash_functions: usize,
}

impl FilterParameters {
    /// Bytes needed to hold `num_bits` bits
    pub fn storage_bytes(&self) -> usize {
        (self.num_bits + 7) / 8
    }
}

/// Calculate Bloom filter parameters for an expected item count and a target false positive rate
///
/// - `m = ceil(-(n * ln(p)) / (ln 2)^2)`
/// - `k = round((m / n) * ln 2)`, at least 1
pub fn optimal_parameters(
    expected_items: usize,
    false_positive_rate: f64,
) -> Result<FilterParameters> {
    if expected_items == 0 {
        tracing::warn!(expected_items, "rejecting filter parameters");
        return Err(BloomError::InvalidParameter(
            "Expected items must be > 0".to_string(),
        ));
    }
    // Written as a negated range check so that NaN is rejected too
    if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
        tracing::warn!(false_positive_rate, "rejecting filter parameters");
        return Err(BloomError::InvalidParameter(format!(
            "False positive rate must be in (0, 1), got {}",
            false_positive_rate
        )));
    }

    let n = expected_items as f64;
    let ln2_squared = LN_2 * LN_2;
    let bits = (-(n * false_positive_rate.ln()) / ln2_squared).ceil();

    if !bits.is_finite() || bits >= usize::MAX as f64 {
        tracing::warn!(expected_items, false_positive_rate, "bit count overflows");
        return Err(BloomError::InvalidParameter(format!(
            "{} items at rate {} need more bits than can be addressed",
            expected_items, false_positive_rate
        )));
    }

    let num_bits = (bits as usize).max(1);
    let num_hash_functions = ((num_bits as f64 / n) * LN_2).round() as usize;

    Ok(FilterParameters {
        num_bits,
        num_hash_functions: num_hash_functions.max(1),
    })
}

/// Theoretical false positive rate after inserting `items` distinct items
///
/// Formula: `(1 - e^(-k * n / m))^k`
pub fn expected_false_positive_rate(
    num_bits: usize,
    items: usize,
    num_hash_functions: usize,
) -> f64 {
    if num_bits == 0 {
        return 1.0;
    }
    let k = num_hash_functions as f64;
    let exponent = -k * items as f64 / num_bits as f64;
    (1.0 - exponent.exp()).powi(num_hash_functions as i32)
}

/// Construction-time configuration of a Bloom filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomConfig {
    /// Design capacity of the filter
    pub expected_items: usize,
    /// Target false positive rate at capacity, strictly between 0 and 1
    pub false_positive_rate: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        BloomConfig {
            expected_items: 1000,
            false_positive_rate: 0.01,
        }
    }
}

impl BloomConfig {
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Self {
        BloomConfig {
            expected_items,
            false_positive_rate,
        }
    }

    pub fn with_expected_items(mut self, expected_items: usize) -> Self {
        self.expected_items = expected_items;
        self
    }

    pub fn with_false_positive_rate(mut self, false_positive_rate: f64) -> Self {
        self.false_positive_rate = false_positive_rate;
        self
    }

    /// Check that a filter can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        self.parameters().map(|_| ())
    }

    /// Derive the filter sizing for this configuration
    pub fn parameters(&self) -> Result<FilterParameters> {
        optimal_parameters(self.expected_items, self.false_positive_rate)
    }
}
