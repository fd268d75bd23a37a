//! # Bloomset
//!
//! A Bloom filter sized from an expected item count and a target false positive rate.
//! Bit positions come from a single 128-bit MurmurHash3 digest split into two halves and
//! combined with Kirsch-Mitzenmacher double hashing.
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01).unwrap();
//! filter.insert("apple");
//!
//! assert!(filter.query("apple"));
//! ```

pub mod bloom;
pub mod hash;
pub mod utils;

pub use bloom::{BloomFilter, BloomStats};
pub use hash::{murmur3_128, DoubleHash, IndexIter};
pub use utils::{expected_false_positive_rate, optimal_parameters, BloomConfig, FilterParameters};

// Python bindings
#[cfg(feature = "python")]
pub mod python_module;

/// Common error types for the library
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BloomError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, BloomError>;
