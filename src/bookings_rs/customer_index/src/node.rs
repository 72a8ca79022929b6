/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tree nodes and the rotations that keep them balanced.
//!
//! Every node exclusively owns its children, so structural changes are
//! expressed as functions that consume a subtree root and hand back the
//! (possibly different) root the caller must store in its place.

use duplicate_chain::DuplicateChain;

use crate::IndexedRecord;

/// A node of the [`BalancedIndex`](crate::BalancedIndex).
///
/// A node owns the [`DuplicateChain`] of every record sharing its key.
/// Smaller keys live in the left subtree, greater keys in the right subtree;
/// equal keys never create a sibling node.
#[derive(Debug)]
pub struct TreeNode<R> {
    /// The customer name shared by every record in `chain`.
    pub(crate) key: String,
    /// Records indexed under `key`, oldest first. Never empty once the
    /// mutation that touched this node has returned.
    pub(crate) chain: DuplicateChain<R>,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub(crate) height: u32,
    pub(crate) left: Option<Box<TreeNode<R>>>,
    pub(crate) right: Option<Box<TreeNode<R>>>,
}

impl<R: IndexedRecord> TreeNode<R> {
    /// Create a leaf holding a single record.
    pub(crate) fn leaf(record: R) -> Box<Self> {
        Box::new(Self {
            key: record.sort_key().to_owned(),
            chain: DuplicateChain::with_record(record),
            height: 1,
            left: None,
            right: None,
        })
    }
}

impl<R> TreeNode<R> {
    /// The key every record of this node is indexed under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The records indexed under [`Self::key`], in insertion order.
    pub fn chain(&self) -> &DuplicateChain<R> {
        &self.chain
    }

    /// Height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> Option<&TreeNode<R>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<R>> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self) -> i64 {
        i64::from(height_of(&self.left)) - i64::from(height_of(&self.right))
    }

    /// Recompute the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    /// Performs a left rotation and returns the new subtree root.
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   a   y     =>     x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    ///
    /// Returns `self` unchanged if there is no right child to rotate up.
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut right) = self.right.take() else {
            return self;
        };

        // The right child's left subtree becomes our right subtree.
        self.right = right.left.take();
        // `self` first: the new root's height depends on it.
        self.update_height();

        right.left = Some(self);
        right.update_height();
        right
    }

    /// Performs a right rotation and returns the new subtree root.
    ///
    /// Mirror image of [`Self::rotate_left`].
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut left) = self.left.take() else {
            return self;
        };

        self.left = left.right.take();
        self.update_height();

        left.right = Some(self);
        left.update_height();
        left
    }

    /// Rotate the left child left, then this node right (left-right case).
    pub(crate) fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(TreeNode::rotate_left);
        self.rotate_right()
    }

    /// Rotate the right child right, then this node left (right-left case).
    pub(crate) fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(TreeNode::rotate_right);
        self.rotate_left()
    }
}

/// Height of an optional subtree; an absent child has height 0.
pub(crate) fn height_of<R>(node: &Option<Box<TreeNode<R>>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}
