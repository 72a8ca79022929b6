/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! BalancedIndex - an AVL-balanced search tree of records keyed by customer name.
//!
//! # Overview
//!
//! The index keeps records ordered by their customer name while allowing
//! several records to share one name. It provides:
//!
//! - Insertion, lookup and deletion in O(log k) for k distinct names
//! - One [`DuplicateChain`](duplicate_chain::DuplicateChain) per name, holding
//!   all records with that name in insertion order
//! - Renaming a record by moving it from one chain to another
//! - A sorted view of every record ("tree sort") without re-sorting: an
//!   in-order traversal of the tree, linearizing each chain on the way
//!
//! Keys are compared as plain strings. Records must be normalized (trimmed,
//! consistently cased) before they reach the index.
//!
//! The tree is single-threaded by construction: nodes own their children and
//! every operation runs to completion before returning.

mod debug;
mod error;
mod iter;
mod node;
mod record;
mod tree;

pub use error::IndexError;
pub use iter::{Nodes, Records};
pub use node::TreeNode;
pub use record::IndexedRecord;
pub use tree::{BalancedIndex, DeleteResult, InsertResult};
