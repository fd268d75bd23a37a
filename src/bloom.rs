//! Standard Bloom filter implementation
//!
//! A space-efficient probabilistic data structure for membership testing. The filter is sized
//! once from an expected item count and a target false positive rate; bits are packed eight
//! to a byte and are never cleared.

use crate::hash::{DoubleHash, IndexIter};
use crate::utils::{expected_false_positive_rate, optimal_parameters, BloomConfig};
use crate::Result;

/// A standard Bloom filter
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Design capacity
    expected_items: usize,
    /// Target false positive rate at capacity
    false_positive_rate: f64,
    /// Number of addressable bits (m)
    num_bits: usize,
    /// Number of bit positions per item (k)
    num_hash_functions: usize,
    /// Bit array, `ceil(num_bits / 8)` bytes, bit `i` lives at `bits[i / 8] >> (i % 8)`
    bits: Vec<u8>,
}

impl BloomFilter {
    /// Create a new Bloom filter
    ///
    /// # Arguments
    /// * `expected_items` - Expected number of elements to insert, must be > 0
    /// * `false_positive_rate` - Target false positive rate, strictly between 0 and 1
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        let params = optimal_parameters(expected_items, false_positive_rate)?;
        let bits = vec![0u8; params.storage_bytes()];

        tracing::debug!(
            expected_items,
            false_positive_rate,
            num_bits = params.num_bits,
            num_hash_functions = params.num_hash_functions,
            storage_bytes = bits.len(),
            "created bloom filter"
        );

        Ok(BloomFilter {
            expected_items,
            false_positive_rate,
            num_bits: params.num_bits,
            num_hash_functions: params.num_hash_functions,
            bits,
        })
    }

    /// Create a Bloom filter from a configuration value
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        Self::new(config.expected_items, config.false_positive_rate)
    }

    /// Insert an item into the filter
    ///
    /// Strings are hashed over their UTF-8 bytes. Inserting the same item again has no effect.
    pub fn insert<K: AsRef<[u8]> + ?Sized>(&mut self, item: &K) {
        for index in self.index_iter(item.as_ref()) {
            self.set_bit(index);
        }
    }

    /// Check if an item might be in the filter
    /// Returns true if the item might be present (with possible false positives)
    /// Returns false if the item is definitely not present
    pub fn query<K: AsRef<[u8]> + ?Sized>(&self, item: &K) -> bool {
        self.index_iter(item.as_ref())
            .all(|index| self.is_bit_set(index))
    }

    /// Bit positions of `item`, one per hash function, each in `[0, num_bits)`
    pub fn indices<K: AsRef<[u8]> + ?Sized>(&self, item: &K) -> Vec<usize> {
        self.index_iter(item.as_ref()).collect()
    }

    fn index_iter(&self, key: &[u8]) -> IndexIter {
        DoubleHash::of(key).indices(self.num_hash_functions, self.num_bits)
    }

    #[inline]
    fn set_bit(&mut self, index: usize) {
        self.bits[index / 8] |= 1 << (index % 8);
    }

    #[inline]
    fn is_bit_set(&self, index: usize) -> bool {
        self.bits[index / 8] & (1 << (index % 8)) != 0
    }

    /// Number of bits currently set
    pub fn count_set_bits(&self) -> usize {
        self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        self.count_set_bits() as f64 / self.num_bits as f64
    }

    /// Get the estimated false positive rate from the current load factor
    pub fn estimated_fpr(&self) -> f64 {
        self.load_factor().powi(self.num_hash_functions as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> BloomStats {
        BloomStats {
            num_bits: self.num_bits,
            storage_bytes: self.bits.len(),
            num_hash_functions: self.num_hash_functions,
            expected_items: self.expected_items,
            target_fpr: self.false_positive_rate,
            fpr_at_capacity: expected_false_positive_rate(
                self.num_bits,
                self.expected_items,
                self.num_hash_functions,
            ),
            set_bits: self.count_set_bits(),
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }

    /// Get the design capacity
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Get the target false positive rate
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Get the number of bits
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get the number of hash functions
    pub fn num_hash_functions(&self) -> usize {
        self.num_hash_functions
    }

    /// The packed bit array
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct BloomStats {
    pub num_bits: usize,
    pub storage_bytes: usize,
    pub num_hash_functions: usize,
    pub expected_items: usize,
    pub target_fpr: f64,
    pub fpr_at_capacity: f64,
    pub set_bits: usize,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for BloomStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Size: {} bits ({} bytes)\n\
             - Hash functions: {}\n\
             - Expected items: {}\n\
             - Target FPR: {:.6} (theoretical at capacity: {:.6})\n\
             - Set bits: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.num_bits,
            self.storage_bytes,
            self.num_hash_functions,
            self.expected_items,
            self.target_fpr,
            self.fpr_at_capacity,
            self.set_bits,
            self.load_factor,
            self.estimated_fpr
        )
    }
}
