/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the balanced index.
//!
//! These checks are compiled for unit tests and behind the `unittest`
//! feature flag. In builds with debug assertions they run after every
//! mutation (`insert`, `delete`, `move_record`) to catch structural
//! violations early; optimized builds (benchmarks) skip them.

use super::{BalancedIndex, IndexStats};
use crate::IndexedRecord;
use crate::node::TreeNode;

impl<R: IndexedRecord> BalancedIndex<R> {
    /// Assert every structural invariant of the tree.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violation found:
    /// - keys out of search-tree order,
    /// - a cached height that disagrees with the children,
    /// - a balance factor outside `{-1, 0, 1}`,
    /// - an empty chain, or a chain entry whose key differs from its node's,
    /// - memoized record or key counts that disagree with the tree.
    pub fn check_invariants(&self) {
        let mut computed = IndexStats::default();
        if let Some(root) = self.root() {
            Self::check_node(root, None, None, &mut computed);
        }
        assert_eq!(
            self.stats.num_records, computed.num_records,
            "num_records: memoized={}, computed={}",
            self.stats.num_records, computed.num_records,
        );
        assert_eq!(
            self.stats.num_keys, computed.num_keys,
            "num_keys: memoized={}, computed={}",
            self.stats.num_keys, computed.num_keys,
        );
    }

    /// Check the subtree rooted at `node`, whose keys must lie strictly
    /// between `lower` and `upper`. Returns the subtree's height.
    fn check_node(
        node: &TreeNode<R>,
        lower: Option<&str>,
        upper: Option<&str>,
        stats: &mut IndexStats,
    ) -> u32 {
        let key = node.key();
        if let Some(lower) = lower {
            assert!(key > lower, "key {key:?} is not greater than {lower:?}");
        }
        if let Some(upper) = upper {
            assert!(key < upper, "key {key:?} is not smaller than {upper:?}");
        }

        assert!(!node.chain().is_empty(), "node {key:?} has an empty chain");
        for record in node.chain() {
            assert_eq!(
                record.sort_key(),
                key,
                "record {:?} is chained under the wrong key",
                record.record_id(),
            );
        }
        stats.num_keys += 1;
        stats.num_records += node.chain().len();

        let left_height = node
            .left()
            .map_or(0, |left| Self::check_node(left, lower, Some(key), stats));
        let right_height = node
            .right()
            .map_or(0, |right| Self::check_node(right, Some(key), upper, stats));

        let expected_height = 1 + left_height.max(right_height);
        assert_eq!(
            node.height(),
            expected_height,
            "node {key:?}: cached height {}, computed {expected_height}",
            node.height(),
        );

        let balance = i64::from(left_height) - i64::from(right_height);
        assert!(
            (-1..=1).contains(&balance),
            "node {key:?} is out of balance: {balance}"
        );

        expected_height
    }
}
