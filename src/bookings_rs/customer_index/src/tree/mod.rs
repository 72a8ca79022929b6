/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Balanced index implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (insert, rebalance on the way up)
//! - [`delete`]: Removal path (chain removal, node removal, rebalance, rename)
//! - [`find`]: Read path (point lookups, ordered traversal)
//! - [`invariants`]: Structural checks, compiled for tests and the `unittest` feature

mod delete;
mod find;
mod insert;
#[cfg(any(test, feature = "unittest"))]
mod invariants;

use crate::IndexedRecord;
use crate::node::{TreeNode, height_of};

/// Result of inserting a record into the index.
///
/// Purely informational: callers are free to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertResult {
    /// Whether a new node was created. `false` means the record was appended
    /// to the chain of an existing key.
    pub new_node: bool,
    /// Number of single rotations performed while rebalancing.
    /// A double rotation counts as two.
    pub rotations: u32,
}

/// Result of a successful removal from the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteResult {
    /// Whether the record was the last one under its key, so the node
    /// holding it was removed from the tree.
    pub node_removed: bool,
    /// Number of single rotations performed while rebalancing.
    pub rotations: u32,
}

/// Aggregate counts for a [`BalancedIndex`], maintained incrementally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexStats {
    /// Total number of records across all chains.
    pub num_records: usize,
    /// Total number of tree nodes, i.e. distinct keys.
    pub num_keys: usize,
}

/// An AVL-balanced search tree of records keyed by customer name.
///
/// Every node owns a [`DuplicateChain`](duplicate_chain::DuplicateChain)
/// holding all records that share its key, in insertion order. The tree
/// keeps the balance factor of every node within `{-1, 0, 1}`, so lookups,
/// insertions and deletions are O(log n) in the number of distinct keys and
/// the recursion depth of every operation is bounded by the tree height.
///
/// # Example
///
/// ```
/// use customer_index::{BalancedIndex, IndexedRecord};
///
/// #[derive(Debug, PartialEq)]
/// struct Booking {
///     id: u32,
///     customer: &'static str,
/// }
///
/// impl IndexedRecord for Booking {
///     type Id = u32;
///
///     fn sort_key(&self) -> &str {
///         self.customer
///     }
///
///     fn record_id(&self) -> u32 {
///         self.id
///     }
/// }
///
/// let mut index = BalancedIndex::new();
/// index.insert(Booking { id: 1, customer: "Bob" });
/// index.insert(Booking { id: 2, customer: "Alice" });
/// index.insert(Booking { id: 3, customer: "Bob" });
///
/// let bobs: Vec<u32> = index.find("Bob").unwrap().iter().map(|b| b.id).collect();
/// assert_eq!(bobs, [1, 3]);
///
/// let sorted: Vec<u32> = index.sorted_records(false).iter().map(|b| b.id).collect();
/// assert_eq!(sorted, [2, 1, 3]);
/// ```
pub struct BalancedIndex<R> {
    root: Option<Box<TreeNode<R>>>,
    stats: IndexStats,
}

impl<R> Default for BalancedIndex<R> {
    fn default() -> Self {
        Self {
            root: None,
            stats: IndexStats::default(),
        }
    }
}

impl<R> BalancedIndex<R> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored, counting every chain entry.
    pub const fn len(&self) -> usize {
        self.stats.num_records
    }

    /// Returns `true` if the index holds no records.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct keys, which is also the number of tree nodes.
    pub const fn num_keys(&self) -> usize {
        self.stats.num_keys
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> u32 {
        height_of(&self.root)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode<R>> {
        self.root.as_deref()
    }

    /// Key of the root node, if any.
    pub fn root_key(&self) -> Option<&str> {
        self.root().map(TreeNode::key)
    }

    /// Drop every node. Records referenced through shared pointers are only
    /// released if the index held the last reference.
    pub fn clear(&mut self) {
        self.root = None;
        self.stats = IndexStats::default();
    }
}

impl<R: IndexedRecord> FromIterator<R> for BalancedIndex<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<R: IndexedRecord> Extend<R> for BalancedIndex<R> {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}
