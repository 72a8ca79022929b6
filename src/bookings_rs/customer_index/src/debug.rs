/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tree-shaped `Debug` output for the balanced index.
//!
//! One node per line, pre-order, children indented below their parent and
//! tagged with the side they hang from:
//!
//! ```text
//! "Bob" (1) h=2
//!   ↳L "Alice" (2) h=1
//!   ↳R "Carol" (1) h=1
//! ```
//!
//! The number in parentheses is the length of the node's duplicate chain.

use std::fmt;

use crate::BalancedIndex;
use crate::node::TreeNode;

impl<R> fmt::Debug for BalancedIndex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return writeln!(f, "<empty>");
        };

        let mut stack: Vec<(&TreeNode<R>, Option<char>, usize)> = vec![(root, None, 0)];
        while let Some((node, side, depth)) = stack.pop() {
            let prefix = match side {
                None => String::new(),
                Some(side) => format!("{}↳{side} ", "  ".repeat(depth)),
            };
            writeln!(
                f,
                "{prefix}{:?} ({}) h={}",
                node.key(),
                node.chain().len(),
                node.height()
            )?;

            // Right first so the left child is printed first.
            if let Some(right) = node.right() {
                stack.push((right, Some('R'), depth + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, Some('L'), depth + 1));
            }
        }
        Ok(())
    }
}
