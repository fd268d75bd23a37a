//! Hashing for Bloom filters
//!
//! Every item is hashed once with 128-bit MurmurHash3 (x64 variant). The digest is split into
//! two 64-bit halves `h1` and `h2`, and the `i`-th bit position is `(h1 + i * h2) mod m`
//! (Kirsch-Mitzenmacher double hashing).

use std::io::Cursor;

/// Seed for the MurmurHash3 digest. A zero seed maps the empty key to an all-zero digest,
/// which would put every position of the empty key on bit 0.
pub const MURMUR_SEED: u32 = 9001;

/// 128-bit MurmurHash3 (x64) digest of `bytes`
pub fn murmur3_128(bytes: &[u8]) -> u128 {
    let mut cursor = Cursor::new(bytes);
    // Reading from an in-memory slice cannot fail
    murmur3::murmur3_x64_128(&mut cursor, MURMUR_SEED).unwrap_or(0)
}

/// The two 64-bit base hashes of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleHash {
    pub h1: u64,
    pub h2: u64,
}

impl DoubleHash {
    /// Hash `key` and split the digest into its base hashes
    pub fn of(key: &[u8]) -> Self {
        Self::from_digest(murmur3_128(key))
    }

    /// Split a digest: `h1` is bytes 0..8 and `h2` bytes 8..16 of its little-endian encoding
    pub fn from_digest(digest: u128) -> Self {
        let bytes = digest.to_le_bytes();
        let (low, high) = bytes.split_at(8);
        DoubleHash {
            h1: read_u64_le(low),
            h2: read_u64_le(high),
        }
    }

    /// The `i`-th combined hash, `h1 + i * h2` with 64-bit wraparound
    #[inline]
    pub fn combined(&self, i: u64) -> u64 {
        self.h1.wrapping_add(i.wrapping_mul(self.h2))
    }

    /// Bit positions in `[0, modulus)` for `count` hash functions
    pub fn indices(self, count: usize, modulus: usize) -> IndexIter {
        IndexIter {
            hash: self,
            next: 0,
            count: count as u64,
            modulus: modulus.max(1) as u64,
        }
    }
}

/// Iterator over the bit positions of one item
#[derive(Debug, Clone)]
pub struct IndexIter {
    hash: DoubleHash,
    next: u64,
    count: u64,
    modulus: u64,
}

impl Iterator for IndexIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.count {
            return None;
        }
        // Unsigned remainder is already the non-negative (floored) modulo
        let index = self.hash.combined(self.next) % self.modulus;
        self.next += 1;
        Some(index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexIter {}

fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}
