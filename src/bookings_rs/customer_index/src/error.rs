/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

/// Errors reported by [`BalancedIndex`](crate::BalancedIndex) operations.
///
/// Both variants are recoverable: the index is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// No node is indexed under `key`.
    #[error("no records are indexed under key {key:?}")]
    KeyNotFound { key: String },

    /// A node exists for `key`, but the record is not part of its chain.
    ///
    /// This usually means the caller deleted the same record twice or
    /// changed its key before removing it from the index.
    #[error("record is not part of the chain indexed under key {key:?}")]
    RecordNotInChain { key: String },
}

impl IndexError {
    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound {
            key: key.to_owned(),
        }
    }

    pub(crate) fn record_not_in_chain(key: &str) -> Self {
        Self::RecordNotInChain {
            key: key.to_owned(),
        }
    }
}
