/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and balancing.
//!
//! Inserting a record descends to the node holding its key. An existing key
//! only grows its duplicate chain; a new key creates a leaf, and the tree is
//! rebalanced on the way back up.

use std::cmp::Ordering;

use super::{BalancedIndex, InsertResult};
use crate::IndexedRecord;
use crate::node::TreeNode;

impl<R: IndexedRecord> BalancedIndex<R> {
    /// Insert a record under its [`sort_key`](IndexedRecord::sort_key).
    ///
    /// If the key is already indexed, the record is appended to that key's
    /// chain and the tree shape does not change. Otherwise a new node is
    /// created and at most one single or double rotation restores balance.
    pub fn insert(&mut self, record: R) -> InsertResult {
        let mut rv = InsertResult::default();
        let (root, _) = Self::insert_node(self.root.take(), record, &mut rv);
        self.root = Some(root);

        self.stats.num_records += 1;
        if rv.new_node {
            self.stats.num_keys += 1;
        }

        #[cfg(all(debug_assertions, any(test, feature = "unittest")))]
        self.check_invariants();

        rv
    }

    /// Recursive insert implementation.
    ///
    /// Returns the new root of the subtree together with the result of
    /// comparing the new key against the key of the node at `slot`.
    /// [`Ordering::Equal`] means no comparison happened below this point,
    /// either because `slot` was empty or because the key already existed.
    ///
    /// # Algorithm
    ///
    /// 1. **Empty slot**: create a leaf holding `record`.
    /// 2. **Equal key**: append `record` to the chain. No structural change,
    ///    so ancestors skip rebalancing.
    /// 3. **Smaller/greater key**: recurse left/right, then recompute the
    ///    height and rebalance if a node was created below.
    fn insert_node(
        slot: Option<Box<TreeNode<R>>>,
        record: R,
        rv: &mut InsertResult,
    ) -> (Box<TreeNode<R>>, Ordering) {
        let Some(mut node) = slot else {
            tracing::debug!(key = record.sort_key(), "creating index node");
            rv.new_node = true;
            return (TreeNode::leaf(record), Ordering::Equal);
        };

        let direction = record.sort_key().cmp(node.key());
        let child_direction = match direction {
            Ordering::Less => {
                let (left, child_direction) = Self::insert_node(node.left.take(), record, rv);
                node.left = Some(left);
                child_direction
            }
            Ordering::Greater => {
                let (right, child_direction) = Self::insert_node(node.right.take(), record, rv);
                node.right = Some(right);
                child_direction
            }
            Ordering::Equal => {
                node.chain.append(record);
                return (node, direction);
            }
        };

        if rv.new_node {
            node.update_height();
            node = Self::balance_after_insert(node, child_direction, rv);
        }
        (node, direction)
    }

    /// Restore the balance of `node` after a new leaf was added below it.
    ///
    /// `child_direction` is the result of comparing the new key against the
    /// key of the child the insertion descended into. It tells the
    /// outer cases (single rotation) from the inner ones (double rotation).
    fn balance_after_insert(
        node: Box<TreeNode<R>>,
        child_direction: Ordering,
        rv: &mut InsertResult,
    ) -> Box<TreeNode<R>> {
        let balance = node.balance_factor();

        if balance > 1 {
            if child_direction == Ordering::Less {
                tracing::trace!(key = node.key(), "insert: right rotation");
                rv.rotations += 1;
                node.rotate_right()
            } else {
                tracing::trace!(key = node.key(), "insert: left-right rotation");
                rv.rotations += 2;
                node.rotate_left_right()
            }
        } else if balance < -1 {
            if child_direction == Ordering::Greater {
                tracing::trace!(key = node.key(), "insert: left rotation");
                rv.rotations += 1;
                node.rotate_left()
            } else {
                tracing::trace!(key = node.key(), "insert: right-left rotation");
                rv.rotations += 2;
                node.rotate_right_left()
            }
        } else {
            node
        }
    }
}
