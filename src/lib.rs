//! simplemap: a string-keyed hash table with DJB2 hashing, chained
//! buckets and doubling growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable table whose bucket placement is fully
//!   determined by the key bytes and the capacity.
//! - Layers:
//!   - ChainTable<V>: structural layer. A power-of-two bucket array whose
//!     slots hold the head of a singly linked collision chain. Chain nodes
//!     live in a generational arena (`slotmap`) and link to each other by
//!     arena key, so no node is ever shared and no traversal recurses.
//!   - HashTable<R>: public API over `ChainTable<Box<[u8]>>`. Copies keys
//!     and values on insert and hands every discarded value to a
//!     per-instance `Release` capability.
//!   - TextMap: text values stored NUL-terminated on top of HashTable.
//!
//! Hashing and placement
//! - DJB2, XOR flavour: `hash = 5381; hash = hash * 33 ^ byte`, 64-bit
//!   wrapping, every key byte included (the empty key is valid and hashes
//!   to 5381).
//! - bucket = `hash % capacity`. Each entry stores its full hash so a
//!   rehash never re-reads key bytes.
//!
//! Growth
//! - Before every insert (including an overwrite) the table checks
//!   `entries / capacity > 0.75` and, if so, doubles. A fresh table
//!   therefore holds 13 entries in 16 buckets and grows on the 14th
//!   insert.
//! - Growth is a full rehash: each old chain is detached, walked
//!   tail-first, and every node is appended to the tail of its new
//!   bucket. The bucket array is reserved up front, so a failed
//!   allocation leaves the table as it was.
//! - Capacity never shrinks; removal only unlinks.
//!
//! Ownership and release
//! - The table owns its bucket array, nodes, key copies and value copies.
//!   Lookups return borrows of the owned value.
//! - Overwrite, removal and `Drop` pass the discarded value to `R`
//!   exactly once. The default `DropRelease` just frees it; any
//!   `FnMut(Box<[u8]>)` can stand in.
//!
//! Errors
//! - Allocation failure of the bucket array or of a key/value copy is
//!   reported as `TableError::OutOfMemory`; capacity arithmetic overflow
//!   as `TableError::CapacityOverflow`. Missing keys are not errors.
//!
//! Notes and non-goals
//! - Single-threaded, no internal locking. `HashTable<R>` is `Send` when
//!   `R` is, so callers needing shared access wrap it in a `Mutex`.
//! - No iteration over entries, no persistence, no shrinking.

mod chain_table;
mod chain_table_proptest;
pub mod error;
pub mod hash;
mod hash_table;
mod owned;
pub mod release;
mod text_map;

// Public surface
pub use error::{Result, TableError};
pub use hash_table::HashTable;
pub use release::{DropRelease, Release};
pub use text_map::TextMap;
