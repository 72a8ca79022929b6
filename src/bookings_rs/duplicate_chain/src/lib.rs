/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! An ordered, double-ended sequence of records that share one index key.
//!
//! A [`DuplicateChain`] keeps its entries in insertion order (oldest first).
//! Appending and removing at either end are O(1); removing an entry from the
//! middle walks the chain and is O(n).
//!
//! # Example
//!
//! ```
//! use duplicate_chain::DuplicateChain;
//!
//! let mut chain = DuplicateChain::new();
//! chain.append(("Alice", 1));
//! chain.append(("Alice", 2));
//! chain.append(("Alice", 3));
//!
//! // Remove the middle entry by identity.
//! assert_eq!(chain.remove(|(_, id)| *id == 2), Some(("Alice", 2)));
//! assert_eq!(chain.linearize(), vec![&("Alice", 1), &("Alice", 3)]);
//! ```

use std::collections::VecDeque;
use std::collections::vec_deque;

/// Records sharing a single key, in insertion order.
///
/// The chain never inspects its entries beyond the predicates handed to
/// [`DuplicateChain::remove`] and [`DuplicateChain::contains`]; the
/// owner decides what "the same record" means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateChain<R> {
    entries: VecDeque<R>,
}

impl<R> Default for DuplicateChain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> DuplicateChain<R> {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Creates a chain holding exactly one record.
    pub fn with_record(record: R) -> Self {
        let mut chain = Self::new();
        chain.append(record);
        chain
    }

    /// Appends `record` after the newest entry.
    pub fn append(&mut self, record: R) {
        self.entries.push_back(record);
    }

    /// Number of records in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the chain holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The oldest record.
    pub fn front(&self) -> Option<&R> {
        self.entries.front()
    }

    /// The newest record.
    pub fn back(&self) -> Option<&R> {
        self.entries.back()
    }

    /// Removes and returns the oldest record.
    pub fn pop_front(&mut self) -> Option<R> {
        self.entries.pop_front()
    }

    /// Removes and returns the newest record.
    pub fn pop_back(&mut self) -> Option<R> {
        self.entries.pop_back()
    }

    /// Removes a record for which `matches` returns `true`.
    ///
    /// `matches` is expected to identify at most one record. The oldest and
    /// the newest records are tried before the interior is walked, so removing
    /// either end is O(1). Returns `None` and leaves the chain untouched if no
    /// record matches.
    pub fn remove(&mut self, mut matches: impl FnMut(&R) -> bool) -> Option<R> {
        if self.entries.front().is_some_and(&mut matches) {
            return self.entries.pop_front();
        }
        if self.entries.back().is_some_and(&mut matches) {
            return self.entries.pop_back();
        }

        let position = self.entries.iter().position(matches)?;
        self.entries.remove(position)
    }

    /// Returns `true` if any record satisfies `matches`.
    pub fn contains(&self, matches: impl FnMut(&R) -> bool) -> bool {
        self.entries.iter().any(matches)
    }

    /// Borrows every record in chain order.
    pub fn linearize(&self) -> Vec<&R> {
        self.entries.iter().collect()
    }

    /// Iterates over the records in chain order.
    ///
    /// The iterator is double-ended, but reversing it reverses insertion
    /// order; ordered traversals of an index should not do that.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<R> FromIterator<R> for DuplicateChain<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<R> Extend<R> for DuplicateChain<R> {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

/// Borrowing iterator over a [`DuplicateChain`], oldest record first.
#[derive(Debug, Clone)]
pub struct Iter<'a, R> {
    inner: vec_deque::Iter<'a, R>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> DoubleEndedIterator for Iter<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

impl<'a, R> IntoIterator for &'a DuplicateChain<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Consuming iterator: yields the records by value, oldest first.
impl<R> IntoIterator for DuplicateChain<R> {
    type Item = R;
    type IntoIter = vec_deque::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
