// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Insertion-ordered set behind a mutex
//!
//! Every public method takes the lock exactly once, so each call is atomic
//! with respect to other callers. Nothing spans two calls: "check, then add"
//! written as `contains` followed by `add` can race, which is why
//! [`OrderedSet::insert_new`] exists.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexSet;
use parking_lot::Mutex;

/// A concurrency-safe set that remembers insertion order
///
/// `add` and `contains` are O(1); `remove` shifts later elements to keep
/// their order. The oldest surviving element is available through
/// [`OrderedSet::peek_first`] and [`OrderedSet::pop_first`].
#[derive(Debug)]
pub struct OrderedSet<T> {
    inner: Mutex<IndexSet<T>>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(IndexSet::new()),
        }
    }

    /// Insert `value` if absent; adding an existing value changes nothing
    pub fn add(&self, value: T) {
        self.inner.lock().insert(value);
    }

    /// Insert `value` if absent, reporting whether it was newly inserted
    ///
    /// Check and insert happen under one lock acquisition.
    pub fn insert_new(&self, value: T) -> bool {
        self.inner.lock().insert(value)
    }

    /// Membership test
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(value)
    }

    /// Delete `value`; returns whether it was present
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().shift_remove(value)
    }

    /// The oldest element, without removing it
    #[must_use]
    pub fn peek_first(&self) -> Option<T> {
        self.inner.lock().first().cloned()
    }

    /// Remove and return the oldest element
    pub fn pop_first(&self) -> Option<T> {
        self.inner.lock().shift_remove_index(0)
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Remove every element
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy of the elements in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Mutex::new(iter.into_iter().collect()),
        }
    }
}
