// SPDX-License-Identifier: MIT OR Apache-2.0

//! A validating, content-addressed collector (§3 `Collectors`, §4.H/§4.I).
//!
//! Every core entity that needs deduplicated, index-addressable storage —
//! conditions, condition sets, abstract decisions, concrete decisions —
//! is held in one of these. The invariants it enforces:
//!
//! 1. Insertion is canonical by key: two calls with equal keys and equal
//!    values return the same index (`getOrAdd` idempotence).
//! 2. Indices increase monotonically in insertion order and never change
//!    once assigned.
//! 3. Inserting a *different* value under an *existing* key is a
//!    [`CtxError::KeyCollision`], not a silent overwrite.

use crate::collectible::Collectible;
use ctxres_core::{CtxError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Implemented by anything a [`Collector`] can store: a stable content
/// key used for deduplication and lookup.
pub trait Keyed {
    fn key(&self) -> String;
}

/// A collector under construction. Not `Sync`-safe to mutate from
/// multiple threads at once (§5); callers serialize construction and
/// then [`Collector::freeze`] the result for read-only sharing.
#[derive(Debug)]
pub struct Collector<T> {
    by_key: HashMap<String, usize>,
    items: Vec<Arc<Collectible<T>>>,
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self { by_key: HashMap::new(), items: Vec::new() }
    }
}

impl<T: Keyed + PartialEq> Collector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` if its key is new, otherwise return the existing
    /// index — failing if an item with the same key but a different
    /// value is already present.
    pub fn get_or_add(&mut self, item: T) -> Result<usize> {
        let key = item.key();
        if let Some(&idx) = self.by_key.get(&key) {
            if self.items[idx].value() == &item {
                return Ok(idx);
            }
            return Err(CtxError::KeyCollision(key));
        }
        let idx = self.items.len();
        let collectible = Arc::new(Collectible::new(item));
        collectible.set_index(idx)?;
        self.items.push(collectible);
        self.by_key.insert(key, idx);
        Ok(idx)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|c| c.value())
    }

    pub fn get_by_key(&self, key: &str) -> Option<(usize, &T)> {
        self.by_key.get(key).map(|&idx| (idx, self.items[idx].value()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().enumerate().map(|(i, c)| (i, c.value()))
    }

    /// Freeze the collector for cheap, lock-free sharing across threads
    /// (§5): once built, no further inserts are possible.
    pub fn freeze(self) -> FrozenCollector<T> {
        FrozenCollector { by_key: Arc::new(self.by_key), items: Arc::new(self.items) }
    }
}

/// An immutable, `Send + Sync` view of a completed [`Collector`].
#[derive(Debug)]
pub struct FrozenCollector<T> {
    by_key: Arc<HashMap<String, usize>>,
    items: Arc<Vec<Arc<Collectible<T>>>>,
}

impl<T> Clone for FrozenCollector<T> {
    fn clone(&self) -> Self {
        Self { by_key: self.by_key.clone(), items: self.items.clone() }
    }
}

impl<T> FrozenCollector<T> {
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|c| c.value())
    }

    pub fn get_by_key(&self, key: &str) -> Option<(usize, &T)> {
        self.by_key.get(key).map(|&idx| (idx, self.items[idx].value()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().enumerate().map(|(i, c)| (i, c.value()))
    }
}
