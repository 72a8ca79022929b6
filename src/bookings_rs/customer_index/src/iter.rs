/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Ordered traversals of the balanced index.
//!
//! Both iterators walk the tree in-order (or reverse in-order) with an
//! explicit stack, holding at most one root-to-leaf path at a time.

use crate::node::TreeNode;

/// Yields the nodes of a tree in key order.
///
/// # Traversal Order
///
/// Ascending visits left subtree, node, right subtree. Descending visits
/// right subtree, node, left subtree.
#[derive(Debug)]
pub struct Nodes<'a, R> {
    /// Nodes whose key has not been yielded yet, innermost on top.
    stack: Vec<&'a TreeNode<R>>,
    descending: bool,
}

impl<'a, R> Nodes<'a, R> {
    pub(crate) fn new(root: Option<&'a TreeNode<R>>, descending: bool) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            descending,
        };
        iter.push_spine(root);
        iter
    }

    /// Push `node` and its chain of near-side descendants (left children when
    /// ascending, right children when descending).
    fn push_spine(&mut self, mut node: Option<&'a TreeNode<R>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = if self.descending {
                current.right()
            } else {
                current.left()
            };
        }
    }
}

impl<'a, R> Iterator for Nodes<'a, R> {
    type Item = &'a TreeNode<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let far_side = if self.descending {
            node.left()
        } else {
            node.right()
        };
        self.push_spine(far_side);
        Some(node)
    }
}

/// Yields every record of a tree, grouped by key in key order.
///
/// Within one key, records always come out in chain (insertion) order,
/// whichever direction the keys are visited in.
#[derive(Debug)]
pub struct Records<'a, R> {
    nodes: Nodes<'a, R>,
    chain: Option<duplicate_chain::Iter<'a, R>>,
}

impl<'a, R> Records<'a, R> {
    pub(crate) fn new(root: Option<&'a TreeNode<R>>, descending: bool) -> Self {
        Self {
            nodes: Nodes::new(root, descending),
            chain: None,
        }
    }
}

impl<'a, R> Iterator for Records<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(record);
            }
            let node = self.nodes.next()?;
            self.chain = Some(node.chain().iter());
        }
    }
}
