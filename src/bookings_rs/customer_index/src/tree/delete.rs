/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Removal path: chain removal, node removal and rebalancing.
//!
//! Removing a record that shares its key with other records only shrinks the
//! chain. Removing the last record of a key removes the node, and every
//! ancestor of the removed position is rebalanced on the way back up.

use std::cmp::Ordering;

use super::{BalancedIndex, DeleteResult};
use crate::node::TreeNode;
use crate::{IndexError, IndexedRecord};

impl<R: IndexedRecord> BalancedIndex<R> {
    /// Remove `record` from the index.
    ///
    /// The record is located by its current [`sort_key`](IndexedRecord::sort_key)
    /// and matched within the chain by [`record_id`](IndexedRecord::record_id).
    ///
    /// # Errors
    ///
    /// - [`IndexError::KeyNotFound`] if no node holds the record's key.
    /// - [`IndexError::RecordNotInChain`] if the key exists but the record
    ///   is not part of its chain.
    ///
    /// The index is unchanged when an error is returned.
    pub fn delete(&mut self, record: &R) -> Result<DeleteResult, IndexError> {
        self.delete_under(record.sort_key(), record.record_id())
    }

    /// Move `record` from `old_key` to the key it currently reports.
    ///
    /// This is how a change of customer name reaches the index: the entry is
    /// first removed from the chain under `old_key`, then `record` is inserted
    /// under its new key. The removal must happen first because it is the
    /// only step that still knows where the entry lives. If it fails, nothing
    /// is inserted.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete`], for the lookup under `old_key`.
    pub fn move_record(&mut self, record: R, old_key: &str) -> Result<(), IndexError> {
        self.delete_under(old_key, record.record_id())?;
        self.insert(record);
        Ok(())
    }

    fn delete_under(&mut self, key: &str, id: R::Id) -> Result<DeleteResult, IndexError> {
        let chain = self
            .chain_mut(key)
            .ok_or_else(|| IndexError::key_not_found(key))?;
        if chain.remove(|entry| entry.record_id() == id).is_none() {
            tracing::warn!(key, ?id, "record is not part of its key's chain");
            return Err(IndexError::record_not_in_chain(key));
        }
        let node_emptied = chain.is_empty();

        self.stats.num_records -= 1;
        let mut rv = DeleteResult::default();

        if node_emptied {
            if let Some(root) = self.root.take() {
                self.root = Self::remove_node(root, key, &mut rv);
            }
            self.stats.num_keys -= 1;
            tracing::debug!(key, rotations = rv.rotations, "removed index node");
        }

        #[cfg(all(debug_assertions, any(test, feature = "unittest")))]
        self.check_invariants();

        Ok(rv)
    }

    /// Remove the node holding `key` from the subtree rooted at `node`.
    ///
    /// The key must be present: the caller has just emptied its chain.
    /// Every node on the path back to `node` is rebalanced, since a removal
    /// can shorten the subtree at several levels.
    fn remove_node(
        mut node: Box<TreeNode<R>>,
        key: &str,
        rv: &mut DeleteResult,
    ) -> Option<Box<TreeNode<R>>> {
        match key.cmp(node.key()) {
            Ordering::Less => {
                node.left = node
                    .left
                    .take()
                    .and_then(|left| Self::remove_node(left, key, rv));
            }
            Ordering::Greater => {
                node.right = node
                    .right
                    .take()
                    .and_then(|right| Self::remove_node(right, key, rv));
            }
            Ordering::Equal => {
                rv.node_removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    (Some(child), None) | (None, Some(child)) => return Some(child),
                    (Some(left), Some(right)) => {
                        // The in-order successor's key and chain take over
                        // this node; its old position is then vacated.
                        let (right, successor) = Self::detach_min(right, rv);
                        let TreeNode { key, chain, .. } = *successor;
                        node.key = key;
                        node.chain = chain;
                        node.left = Some(left);
                        node.right = right;
                    }
                }
            }
        }

        Some(Self::balance_after_delete(node, rv))
    }

    /// Detach the leftmost (minimum) node of the subtree rooted at `node`.
    ///
    /// Returns the rebalanced remainder of the subtree and the detached node.
    /// The minimum never has a left child, so it is replaced by its right
    /// child, if any.
    fn detach_min(
        mut node: Box<TreeNode<R>>,
        rv: &mut DeleteResult,
    ) -> (Option<Box<TreeNode<R>>>, Box<TreeNode<R>>) {
        let Some(left) = node.left.take() else {
            let rest = node.right.take();
            return (rest, node);
        };

        let (left, min) = Self::detach_min(left, rv);
        node.left = left;
        (Some(Self::balance_after_delete(node, rv)), min)
    }

    /// Recompute the height of `node` and restore its balance after a
    /// removal in one of its subtrees.
    ///
    /// Unlike insertion, the case is picked by the balance of the taller
    /// child, whose subtrees may be of equal height after a removal.
    fn balance_after_delete(
        mut node: Box<TreeNode<R>>,
        rv: &mut DeleteResult,
    ) -> Box<TreeNode<R>> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            let left_balance = node.left().map_or(0, TreeNode::balance_factor);
            if left_balance >= 0 {
                tracing::trace!(key = node.key(), "delete: right rotation");
                rv.rotations += 1;
                node.rotate_right()
            } else {
                tracing::trace!(key = node.key(), "delete: left-right rotation");
                rv.rotations += 2;
                node.rotate_left_right()
            }
        } else if balance < -1 {
            let right_balance = node.right().map_or(0, TreeNode::balance_factor);
            if right_balance <= 0 {
                tracing::trace!(key = node.key(), "delete: left rotation");
                rv.rotations += 1;
                node.rotate_left()
            } else {
                tracing::trace!(key = node.key(), "delete: right-left rotation");
                rv.rotations += 2;
                node.rotate_right_left()
            }
        } else {
            node
        }
    }
}
