// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Collectible` value type (§9 Design Notes).
//!
//! A naive design mixes a string key and a late-bound integer index
//! into the entity itself via a shared base class. Here the mixin is
//! replaced with a wrapper value type owned exclusively by a
//! [`crate::collector::Collector`]: the wrapped value is only ever handed
//! out by shared reference, and the index is a one-shot
//! `Constructed -> Indexed(i)` transition with no way back.

use ctxres_core::{CtxError, Result};
use std::sync::OnceLock;

/// Wraps a collected entity with its late-bound index.
///
/// `set_index` is the only way to move from *unindexed* to *indexed*; it
/// is idempotent when called again with the same index (collector
/// invariant (c), §3) and fails with [`CtxError::IndexAlreadySet`] when
/// called again with a different one.
#[derive(Debug)]
pub struct Collectible<T> {
    value: T,
    index: OnceLock<usize>,
}

impl<T> Collectible<T> {
    pub fn new(value: T) -> Self {
        Self { value, index: OnceLock::new() }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn index(&self) -> Option<usize> {
        self.index.get().copied()
    }

    /// One-shot index assignment. See the module docs for the state
    /// machine this implements.
    pub fn set_index(&self, i: usize) -> Result<()> {
        match self.index.get() {
            None => {
                // `OnceLock::set` can race under concurrent construction;
                // a loser whose value matches is still fine, a loser with
                // a differing value is an invariant break, not ours to
                // paper over.
                if self.index.set(i).is_err() {
                    return self.set_index(i);
                }
                Ok(())
            }
            Some(&existing) if existing == i => Ok(()),
            Some(&existing) => Err(CtxError::IndexAlreadySet(format!(
                "already indexed at {existing}, attempted to re-index to {i}"
            ))),
        }
    }
}

impl<T: PartialEq> PartialEq for Collectible<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Clone> Clone for Collectible<T> {
    fn clone(&self) -> Self {
        let cloned = Self::new(self.value.clone());
        if let Some(i) = self.index() {
            let _ = cloned.set_index(i);
        }
        cloned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_transition() {
        let c = Collectible::new("hello");
        assert_eq!(c.index(), None);
        c.set_index(3).unwrap();
        assert_eq!(c.index(), Some(3));
    }

    #[test]
    fn reindexing_same_value_is_idempotent() {
        let c = Collectible::new("hello");
        c.set_index(3).unwrap();
        c.set_index(3).unwrap();
        assert_eq!(c.index(), Some(3));
    }

    #[test]
    fn reindexing_different_value_fails() {
        let c = Collectible::new("hello");
        c.set_index(3).unwrap();
        let err = c.set_index(4).unwrap_err();
        assert!(matches!(err, CtxError::IndexAlreadySet(_)));
        // the original index is untouched by the failed attempt
        assert_eq!(c.index(), Some(3));
    }
}
