//! DJB2 string hashing and bucket indexing.
//!
//! The hash is the XOR flavour of Bernstein's function: start from 5381
//! and fold every key byte in with `hash * 33 ^ byte`. All arithmetic is
//! 64-bit wrapping and bytes are unsigned, so the result does not depend
//! on the platform. Every byte of the key participates; there is no
//! terminator.

/// Bucket count of a freshly created table.
pub const INITIAL_CAPACITY: usize = 16;

/// Growth threshold as a ratio: a table grows when
/// `entries / capacity > LOAD_FACTOR_NUM / LOAD_FACTOR_DEN` (0.75).
pub const LOAD_FACTOR_NUM: usize = 3;
pub const LOAD_FACTOR_DEN: usize = 4;

const DJB2_SEED: u64 = 5381;

/// Hash `bytes` with DJB2 (XOR variant).
#[inline]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &b| {
        ((hash << 5).wrapping_add(hash)) ^ u64::from(b)
    })
}

/// Map a full hash onto a bucket of a table with `capacity` buckets.
///
/// `capacity` must be non-zero. Tables only ever use powers of two, but
/// the reduction is a plain modulus so it is valid for any capacity.
#[inline]
pub fn bucket_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (hash % capacity as u64) as usize
}

/// True when a table holding `entries` in `capacity` buckets is above
/// the load-factor threshold and must grow before the next insert.
#[inline]
pub(crate) fn over_threshold(entries: usize, capacity: usize) -> bool {
    // entries / capacity > 3/4, kept in integers.
    (entries as u128) * (LOAD_FACTOR_DEN as u128) > (capacity as u128) * (LOAD_FACTOR_NUM as u128)
}
