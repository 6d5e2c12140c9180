//! HashTable: public byte-buffer table with a per-instance release capability.

use crate::chain_table::ChainTable;
use crate::error::Result;
use crate::owned;
use crate::release::{DropRelease, Release};
use core::fmt;

/// String-keyed table of owned byte buffers.
///
/// Keys and values are copied on insert; lookups borrow the table's copy.
/// Every value the table discards (overwritten, removed, or still present
/// when the table is dropped) is passed to `R` exactly once.
pub struct HashTable<R: Release = DropRelease> {
    chains: ChainTable<Box<[u8]>>,
    release: R,
}

impl HashTable {
    /// Empty table with 16 buckets that frees discarded values.
    pub fn new() -> Self {
        Self::with_release(DropRelease)
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Release> HashTable<R> {
    /// Empty table with 16 buckets that hands discarded values to `release`.
    pub fn with_release(release: R) -> Self {
        Self {
            chains: ChainTable::new(),
            release,
        }
    }

    /// Empty table with at least `capacity` buckets (rounded up to a power
    /// of two, minimum 16).
    pub fn with_capacity_and_release(capacity: usize, release: R) -> Result<Self> {
        Ok(Self {
            chains: ChainTable::with_capacity(capacity)?,
            release,
        })
    }

    /// Store a copy of `value` under `key`.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value is released; the entry count is unchanged. The table may
    /// grow (and fully rehash) before the insert. On error the table is
    /// unchanged.
    pub fn insert(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let value = owned::try_copy_bytes(value)?;
        if let Some(old) = self.chains.insert(key, value)? {
            self.release.release(old);
        }
        Ok(())
    }

    /// Borrow the value stored under `key`.
    pub fn lookup(&self, key: &str) -> Option<&[u8]> {
        self.chains.get(key).map(|v| &**v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.chains.get(key).is_some()
    }

    /// Remove `key` and release its value. Returns false (and does nothing)
    /// when the key is absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.chains.remove(key) {
            Some((_key, value)) => {
                self.release.release(value);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.len() == 0
    }

    /// Current number of buckets. Always a power of two, never shrinks.
    pub fn capacity(&self) -> usize {
        self.chains.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Bucket `key` maps to at the current capacity.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.chains.bucket_of(key)
    }

    pub fn release_mut(&mut self) -> &mut R {
        &mut self.release
    }

    #[cfg(test)]
    pub(crate) fn chains(&self) -> &ChainTable<Box<[u8]>> {
        &self.chains
    }
}

impl<R: Release> Drop for HashTable<R> {
    fn drop(&mut self) {
        let release = &mut self.release;
        self.chains.drain_with(|value| release.release(value));
    }
}

impl<R: Release> fmt::Debug for HashTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
