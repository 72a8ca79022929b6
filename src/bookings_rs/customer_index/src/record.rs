/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::fmt::Debug;
use std::rc::Rc;

/// The capability a record must offer to be stored in a [`BalancedIndex`](crate::BalancedIndex).
///
/// The index treats the sort key as an opaque string and compares keys
/// lexicographically. Keys must be normalized by the caller before a record
/// reaches the index; the index never trims or case-folds them.
pub trait IndexedRecord {
    /// Identity of a record. Two entries with the same id are the same record,
    /// whatever their other fields say.
    type Id: Copy + Eq + Debug;

    /// The key the record is indexed under (the customer name).
    fn sort_key(&self) -> &str;

    /// The identity used when removing the record from its duplicate chain.
    fn record_id(&self) -> Self::Id;
}

/// Shared references index like the record they point to.
///
/// This lets a duplicate chain hold a reference to a record owned by a flat
/// record collection instead of owning the record itself.
impl<R: IndexedRecord + ?Sized> IndexedRecord for Rc<R> {
    type Id = R::Id;

    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }

    fn record_id(&self) -> Self::Id {
        (**self).record_id()
    }
}

impl<R: IndexedRecord + ?Sized> IndexedRecord for &R {
    type Id = R::Id;

    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }

    fn record_id(&self) -> Self::Id {
        (**self).record_id()
    }
}
