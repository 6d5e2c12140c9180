//! TextMap: the text-value specialization of `HashTable`.
//!
//! Values are stored as their UTF-8 bytes followed by a NUL terminator
//! (stored size = length + 1) and released by ordinary drop. Lookups hand
//! back the text without the terminator.

use crate::error::{Result, TableError};
use crate::hash_table::HashTable;

#[derive(Debug, Default)]
pub struct TextMap {
    inner: HashTable,
}

impl TextMap {
    pub fn new() -> Self {
        Self {
            inner: HashTable::new(),
        }
    }

    /// Store a copy of `text` under `key`, replacing any previous text.
    pub fn insert(&mut self, key: &str, text: &str) -> Result<()> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(text.len() + 1)
            .map_err(|_| TableError::OutOfMemory {
                bytes: text.len() + 1,
            })?;
        buf.extend_from_slice(text.as_bytes());
        buf.push(0);
        self.inner.insert(key, &buf)
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        let stored = self.inner.lookup(key)?;
        let text = stored.strip_suffix(b"\0").unwrap_or(stored);
        core::str::from_utf8(text).ok()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.inner.remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Bucket `key` maps to at the current capacity.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.inner.bucket_index(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_terminated_bytes() {
        let mut m = TextMap::new();
        m.insert("greeting", "hello").unwrap();
        assert_eq!(m.inner.lookup("greeting"), Some(&b"hello\0"[..]));
        assert_eq!(m.lookup("greeting"), Some("hello"));
    }

    #[test]
    fn empty_text_is_not_missing() {
        let mut m = TextMap::new();
        m.insert("blank", "").unwrap();
        assert_eq!(m.lookup("blank"), Some(""));
        assert_eq!(m.lookup("absent"), None);
    }

    #[test]
    fn interior_nul_survives() {
        let mut m = TextMap::new();
        m.insert("k", "a\0b").unwrap();
        assert_eq!(m.lookup("k"), Some("a\0b"));
    }
}
