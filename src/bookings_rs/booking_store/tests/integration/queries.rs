/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use booking_store::StoreError;
use itertools::Itertools;
use pretty_assertions::assert_eq;

use crate::helpers::{ids, store_of};

#[test]
fn lookup_normalizes_the_query() {
    let store = store_of(&["Alice Smith", "Bob", "alice   smith"]);
    assert_eq!(ids(store.bookings_for("  ALICE smith").unwrap()), [0, 2]);
}

#[test]
fn blank_lookup_is_rejected() {
    let store = store_of(&["Alice"]);
    assert_eq!(
        store.bookings_for(""),
        Err(StoreError::InvalidCustomerName)
    );
}

#[test]
fn sorted_view_groups_by_customer_in_creation_order() {
    let store = store_of(&["Carol", "Alice", "Bob", "Alice", "Carol", "Alice"]);

    assert_eq!(ids(store.sorted_by_customer(false)), [1, 3, 5, 2, 0, 4]);
    // Descending reverses customer order only.
    assert_eq!(ids(store.sorted_by_customer(true)), [0, 4, 2, 1, 3, 5]);
}

#[test]
fn customers_are_distinct_and_ascending() {
    let store = store_of(&["dave", "Bob", "eve", "bob", "alice"]);
    assert_eq!(
        store.customers().collect::<Vec<_>>(),
        ["Alice", "Bob", "Dave", "Eve"]
    );
}

#[test]
fn sorted_view_matches_flat_list_sorted_by_name() {
    let names = ["Mia", "Leo", "Ana", "Leo", "Zoe", "Ana", "Kai", "Mia"];
    let store = store_of(&names);

    let from_tree = ids(store.sorted_by_customer(false));
    let from_flat: Vec<u64> = store
        .bookings()
        .iter()
        .sorted_by(|a, b| a.customer.cmp(&b.customer))
        .map(|b| b.id.get())
        .collect();
    assert_eq!(from_tree, from_flat);
}
