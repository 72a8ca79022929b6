/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: point lookups and ordered traversal ("tree sort").

use std::cmp::Ordering;

use duplicate_chain::DuplicateChain;

use super::BalancedIndex;
use crate::IndexError;
use crate::iter::{Nodes, Records};

impl<R> BalancedIndex<R> {
    /// Borrow the chain of records indexed under `key`.
    pub fn chain(&self, key: &str) -> Option<&DuplicateChain<R>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.chain()),
            };
        }
        None
    }

    pub(super) fn chain_mut(&mut self, key: &str) -> Option<&mut DuplicateChain<R>> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.chain),
            };
        }
        None
    }

    /// Returns `true` if at least one record is indexed under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.chain(key).is_some()
    }

    /// All records indexed under `key`, in insertion order.
    ///
    /// # Errors
    ///
    /// [`IndexError::KeyNotFound`] if nothing is indexed under `key`.
    pub fn find(&self, key: &str) -> Result<Vec<&R>, IndexError> {
        self.chain(key)
            .map(DuplicateChain::linearize)
            .ok_or_else(|| IndexError::key_not_found(key))
    }

    /// Every record, grouped by key in ascending (or descending) key order.
    ///
    /// Records sharing a key keep their insertion order in both directions:
    /// `descending` reverses the order of the groups, not the groups
    /// themselves. No comparisons are performed, the tree is already sorted.
    pub fn sorted_records(&self, descending: bool) -> Vec<&R> {
        let mut records = Vec::with_capacity(self.len());
        records.extend(Records::new(self.root(), descending));
        records
    }

    /// Lazily iterate over every record in ascending key order.
    pub fn iter(&self) -> Records<'_, R> {
        Records::new(self.root(), false)
    }

    /// Lazily iterate over every record in descending key order.
    pub fn iter_descending(&self) -> Records<'_, R> {
        Records::new(self.root(), true)
    }

    /// The distinct keys, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        Nodes::new(self.root(), false).map(|node| node.key())
    }
}

impl<'a, R> IntoIterator for &'a BalancedIndex<R> {
    type Item = &'a R;
    type IntoIter = Records<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
