//! ChainTable: structural layer with DJB2 buckets and linked collision chains.
//!
//! Entries live in a generational arena; each bucket holds the arena key of
//! its chain head and every entry links to the next one. Only this module
//! touches the links.

use crate::error::{Result, TableError};
use crate::hash::{bucket_index, djb2, over_threshold, INITIAL_CAPACITY};
use crate::owned;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: V,
    hash: u64,
    next: Option<DefaultKey>,
}

pub(crate) struct ChainTable<V> {
    buckets: Vec<Option<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<V>>, // chain nodes, linked through `next`
}

impl<V> ChainTable<V> {
    pub(crate) fn new() -> Self {
        Self {
            buckets: vec![None; INITIAL_CAPACITY],
            slots: SlotMap::with_key(),
        }
    }

    /// Table with at least `capacity` buckets, rounded up to a power of two
    /// and never below `INITIAL_CAPACITY`.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity
            .max(INITIAL_CAPACITY)
            .checked_next_power_of_two()
            .ok_or(TableError::CapacityOverflow { capacity })?;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| TableError::OutOfMemory {
                bytes: capacity.saturating_mul(core::mem::size_of::<Option<DefaultKey>>()),
            })?;
        buckets.resize(capacity, None);
        log::trace!("created chain table with {} buckets", capacity);
        Ok(Self {
            buckets,
            slots: SlotMap::with_key(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn bucket_of(&self, key: &str) -> usize {
        bucket_index(djb2(key.as_bytes()), self.capacity())
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let hash = djb2(key.as_bytes());
        let mut cur = self.buckets[bucket_index(hash, self.capacity())];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.hash == hash && &*e.key == key {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|k| &self.slots[k].value)
    }

    /// Insert `value` under `key`, growing first if the table is above the
    /// load-factor threshold. Returns the displaced value on overwrite.
    pub(crate) fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        if over_threshold(self.len(), self.capacity()) {
            self.grow()?;
        }

        let hash = djb2(key.as_bytes());
        let idx = bucket_index(hash, self.capacity());
        let mut tail = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let e = &mut self.slots[k];
            if e.hash == hash && &*e.key == key {
                return Ok(Some(core::mem::replace(&mut e.value, value)));
            }
            tail = cur;
            cur = e.next;
        }

        let key = owned::try_copy_str(key)?;
        let k = self.slots.insert(Entry {
            key,
            value,
            hash,
            next: None,
        });
        match tail {
            None => self.buckets[idx] = Some(k),
            Some(t) => self.slots[t].next = Some(k),
        }
        Ok(None)
    }

    /// Unlink and return the entry for `key`, if present.
    pub(crate) fn remove(&mut self, key: &str) -> Option<(Box<str>, V)> {
        let hash = djb2(key.as_bytes());
        let idx = bucket_index(hash, self.capacity());
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.hash == hash && &*e.key == key {
                let next = e.next;
                match prev {
                    None => self.buckets[idx] = next,
                    Some(p) => self.slots[p].next = next,
                }
                return self.slots.remove(k).map(|e| (e.key, e.value));
            }
            prev = cur;
            cur = e.next;
        }
        None
    }

    /// Empty every chain, handing each value to `f`. Capacity is kept.
    pub(crate) fn drain_with<F>(&mut self, mut f: F)
    where
        F: FnMut(V),
    {
        for i in 0..self.buckets.len() {
            let mut cur = self.buckets[i].take();
            while let Some(k) = cur {
                match self.slots.remove(k) {
                    Some(e) => {
                        cur = e.next;
                        f(e.value);
                    }
                    None => cur = None,
                }
            }
        }
    }

    /// Double the bucket count and relink every entry under the new capacity.
    ///
    /// The bucket array is reserved before anything is relinked, so a failed
    /// allocation leaves the table untouched.
    fn grow(&mut self) -> Result<()> {
        let old = self.capacity();
        let new = old
            .checked_mul(2)
            .ok_or(TableError::CapacityOverflow { capacity: old })?;
        self.buckets
            .try_reserve_exact(new - old)
            .map_err(|_| TableError::OutOfMemory {
                bytes: (new - old).saturating_mul(core::mem::size_of::<Option<DefaultKey>>()),
            })?;
        self.buckets.resize(new, None);
        log::debug!(
            "growing chain table from {} to {} buckets ({} entries)",
            old,
            new,
            self.len()
        );

        for i in 0..old {
            // Detach, then walk tail-first.
            let head = self.buckets[i].take();
            let mut cur = self.reverse_chain(head);
            while let Some(k) = cur {
                let e = &mut self.slots[k];
                cur = e.next.take();
                let dest = bucket_index(e.hash, new);
                self.append(dest, k);
            }
        }
        Ok(())
    }

    fn reverse_chain(&mut self, head: Option<DefaultKey>) -> Option<DefaultKey> {
        let mut prev = None;
        let mut cur = head;
        while let Some(k) = cur {
            let e = &mut self.slots[k];
            cur = e.next;
            e.next = prev;
            prev = Some(k);
        }
        prev
    }

    /// Link the detached node `k` at the tail of bucket `idx`.
    fn append(&mut self, idx: usize, k: DefaultKey) {
        let Some(mut tail) = self.buckets[idx] else {
            self.buckets[idx] = Some(k);
            return;
        };
        while let Some(next) = self.slots[tail].next {
            tail = next;
        }
        self.slots[tail].next = Some(k);
    }

    /// Keys of bucket `idx` in chain order.
    #[cfg(test)]
    pub(crate) fn chain_keys(&self, idx: usize) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            out.push(&*self.slots[k].key);
            cur = self.slots[k].next;
        }
        out
    }

    /// Walk every chain and assert the structural invariants.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        let cap = self.capacity();
        assert!(cap.is_power_of_two() && cap >= INITIAL_CAPACITY);
        let mut seen_keys = HashSet::new();
        let mut reached = 0usize;
        for idx in 0..cap {
            let mut cur = self.buckets[idx];
            while let Some(k) = cur {
                let e = &self.slots[k];
                assert_eq!(e.hash, djb2(e.key.as_bytes()), "stale hash");
                assert_eq!(bucket_index(e.hash, cap), idx, "entry in wrong bucket");
                assert!(seen_keys.insert(e.key.clone()), "duplicate key {:?}", e.key);
                reached += 1;
                assert!(reached <= self.slots.len(), "cycle in chain {}", idx);
                cur = e.next;
            }
        }
        assert_eq!(reached, self.slots.len(), "unreachable entries");
    }
}
