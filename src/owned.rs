//! Fallible copies of caller-provided keys and values.

use crate::error::{Result, TableError};

/// Copy `src` into a fresh exactly-sized heap buffer.
pub(crate) fn try_copy_bytes(src: &[u8]) -> Result<Box<[u8]>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| TableError::OutOfMemory { bytes: src.len() })?;
    buf.extend_from_slice(src);
    Ok(buf.into_boxed_slice())
}

/// Copy `src` into a fresh owned string.
pub(crate) fn try_copy_str(src: &str) -> Result<Box<str>> {
    let mut s = String::new();
    s.try_reserve_exact(src.len())
        .map_err(|_| TableError::OutOfMemory { bytes: src.len() })?;
    s.push_str(src);
    Ok(s.into_boxed_str())
}
