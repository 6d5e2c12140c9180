//! Value-release capability.
//!
//! A table hands every value it discards (overwrite, removal, drop of the
//! table) to its `Release` implementation exactly once. The default simply
//! drops the buffer. Any `FnMut(Box<[u8]>)` closure is also a `Release`,
//! which is how callers plug in custom cleanup.

/// Receives ownership of each value a table discards.
pub trait Release {
    fn release(&mut self, value: Box<[u8]>);
}

/// Default capability: frees the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropRelease;

impl Release for DropRelease {
    #[inline]
    fn release(&mut self, value: Box<[u8]>) {
        drop(value);
    }
}

impl<F> Release for F
where
    F: FnMut(Box<[u8]>),
{
    #[inline]
    fn release(&mut self, value: Box<[u8]>) {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_receive_the_value() {
        let mut seen: Vec<Vec<u8>> = Vec::new();
        {
            let mut r = |v: Box<[u8]>| seen.push(v.into_vec());
            r.release(Box::from(&b"one"[..]));
            r.release(Box::from(&b"two"[..]));
        }
        assert_eq!(seen, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn default_release_accepts_any_buffer() {
        let mut r = DropRelease;
        r.release(Box::from(&[][..]));
        r.release(vec![0u8; 64].into_boxed_slice());
    }
}
