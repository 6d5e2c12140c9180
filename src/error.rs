//! Error type shared by every table layer.

use thiserror::Error;

/// Failures surfaced by table construction, insertion and growth.
///
/// Missing keys are never errors: lookups return `None` and removals
/// return `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A bucket array, key copy or value copy could not be allocated.
    /// The table is left exactly as it was before the call.
    #[error("memory allocation failed: requested {bytes} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        bytes: usize,
    },

    /// Doubling (or rounding up) the bucket count would overflow `usize`.
    #[error("capacity overflow: cannot grow beyond {capacity} buckets")]
    CapacityOverflow {
        /// Bucket count at the time of the failed resize
        capacity: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
