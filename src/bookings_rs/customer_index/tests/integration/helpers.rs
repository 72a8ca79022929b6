/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the balanced index integration tests.

use std::rc::Rc;

use customer_index::{BalancedIndex, IndexedRecord};

/// A minimal booking-like record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u32,
    pub name: String,
}

impl Entry {
    pub fn new(id: u32, name: &str) -> Rc<Self> {
        Rc::new(Self {
            id,
            name: name.to_owned(),
        })
    }
}

impl IndexedRecord for Entry {
    type Id = u32;

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn record_id(&self) -> u32 {
        self.id
    }
}

/// Build an index from names, numbering the records from 1 in order.
pub fn index_of(names: &[&str]) -> BalancedIndex<Rc<Entry>> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| Entry::new(id, name))
        .collect()
}

/// Ids of a record sequence, in order.
pub fn ids<'a>(records: impl IntoIterator<Item = &'a Rc<Entry>>) -> Vec<u32> {
    records.into_iter().map(|record| record.id).collect()
}
