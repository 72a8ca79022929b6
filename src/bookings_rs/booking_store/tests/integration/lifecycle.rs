/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::rc::Rc;

use booking_store::{Booking, BookingStore, CustomerName, StoreError};
use customer_index::IndexError;
use pretty_assertions::assert_eq;

use crate::helpers::{booking, id, ids, store_of};

#[test]
fn add_assigns_increasing_ids_and_normalizes_names() {
    let mut store = BookingStore::new();
    let first = store.add_booking(booking("  alice  SMITH ", "Spa")).unwrap();
    let second = store.add_booking(booking("bob", "Golf")).unwrap();

    assert_eq!((first.get(), second.get()), (0, 1));
    assert_eq!(store.get(first).unwrap().customer.as_str(), "Alice Smith");
    assert_eq!(store.len(), 2);
    assert_eq!(store.index().len(), 2);
}

#[test]
fn blank_customer_is_rejected_without_consuming_an_id() {
    let mut store = BookingStore::new();
    assert_eq!(
        store.add_booking(booking(" \t", "Spa")),
        Err(StoreError::InvalidCustomerName)
    );
    assert!(store.is_empty());
    assert!(store.index().is_empty());

    assert_eq!(store.add_booking(booking("Eve", "Spa")).unwrap().get(), 0);
}

#[test]
fn remove_returns_the_booking_and_keeps_creation_order() {
    let mut store = store_of(&["Carol", "Alice", "Bob", "Alice"]);

    let removed = store.remove_booking(id(1)).unwrap();
    assert_eq!(removed.customer.as_str(), "Alice");
    assert_eq!(ids(store.bookings().iter().map(Rc::as_ref)), [0, 2, 3]);
    assert_eq!(ids(store.bookings_for("alice").unwrap()), [3]);
    store.index().check_invariants();
}

#[test]
fn removing_last_booking_of_a_customer_drops_the_customer() {
    let mut store = store_of(&["Alice", "Bob"]);
    store.remove_booking(id(1)).unwrap();

    assert_eq!(store.customers().collect::<Vec<_>>(), ["Alice"]);
    assert_eq!(
        store.bookings_for("Bob"),
        Err(StoreError::Index(IndexError::KeyNotFound {
            key: "Bob".to_owned()
        }))
    );
}

#[test]
fn removed_booking_outlives_the_store_entry() {
    let mut store = store_of(&["Alice"]);
    let removed = store.remove_booking(id(0)).unwrap();
    assert_eq!(Rc::strong_count(&removed), 1);
    assert_eq!(removed.package, "package 0");
}

#[test]
fn unknown_ids_are_reported() {
    let mut store = store_of(&["Alice"]);
    assert_eq!(
        store.remove_booking(id(7)),
        Err(StoreError::BookingNotFound(id(7)))
    );
    assert_eq!(
        store.rename_customer(id(7), "Bob"),
        Err(StoreError::BookingNotFound(id(7)))
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn rename_moves_the_booking_to_the_end_of_the_new_chain() {
    let mut store = store_of(&["Bob", "Alice", "Alice", "Carol"]);

    store.rename_customer(id(0), "alice").unwrap();

    assert_eq!(store.get(id(0)).unwrap().customer.as_str(), "Alice");
    assert_eq!(ids(store.bookings_for("Alice").unwrap()), [1, 2, 0]);
    assert_eq!(store.customers().collect::<Vec<_>>(), ["Alice", "Carol"]);
    // Creation order is unaffected.
    assert_eq!(ids(store.bookings().iter().map(Rc::as_ref)), [0, 1, 2, 3]);
    store.index().check_invariants();
}

#[test]
fn rename_to_the_same_name_keeps_chain_position() {
    let mut store = store_of(&["Alice", "Alice"]);
    store.rename_customer(id(0), " ALICE ").unwrap();
    assert_eq!(ids(store.bookings_for("Alice").unwrap()), [0, 1]);
}

#[test]
fn rename_to_blank_name_changes_nothing() {
    let mut store = store_of(&["Alice"]);
    assert_eq!(
        store.rename_customer(id(0), "   "),
        Err(StoreError::InvalidCustomerName)
    );
    assert_eq!(store.get(id(0)).unwrap().customer.as_str(), "Alice");
}

fn persisted(raw_id: u64, customer: &str) -> Booking {
    Booking {
        id: id(raw_id),
        customer: CustomerName::new(customer).unwrap(),
        package: "Half board".to_owned(),
        guests: 1,
        nights: 2,
        price_cents: 9_900,
    }
}

#[test]
fn rebuild_keeps_ids_and_continues_numbering() {
    let mut store =
        BookingStore::from_bookings([persisted(4, "Dave"), persisted(9, "alice"), persisted(2, "Dave")])
            .unwrap();
    store.index().check_invariants();

    assert_eq!(ids(store.bookings().iter().map(Rc::as_ref)), [4, 9, 2]);
    assert_eq!(ids(store.sorted_by_customer(false)), [9, 4, 2]);
    assert_eq!(store.add_booking(booking("Eve", "Spa")).unwrap().get(), 10);
}

#[test]
fn rebuild_rejects_duplicate_ids() {
    let result = BookingStore::from_bookings([persisted(1, "Alice"), persisted(1, "Bob")]);
    assert_eq!(result.unwrap_err(), StoreError::DuplicateBookingId(id(1)));
}

#[test]
fn rebuild_keeps_normalized_names() {
    let store = BookingStore::from_bookings([persisted(0, "  élodie   DUPONT ")]).unwrap();
    assert_eq!(store.get(id(0)).unwrap().customer.as_str(), "Élodie Dupont");
    assert_eq!(ids(store.bookings_for("Élodie Dupont").unwrap()), [0]);
}

#[test]
fn loading_the_last_id_stops_further_bookings() {
    let mut store =
        BookingStore::from_bookings([persisted(3, "Ann"), persisted(u64::MAX, "Ann")]).unwrap();
    assert_eq!(ids(store.bookings_for("Ann").unwrap()), [3, u64::MAX]);

    assert_eq!(
        store.add_booking(booking("Bob", "Spa")),
        Err(StoreError::IdSpaceExhausted)
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.customers().collect::<Vec<_>>(), ["Ann"]);
    store.index().check_invariants();
}

#[test]
fn total_price_covers_every_night() {
    let store = store_of(&["Alice"]);
    assert_eq!(store.get(id(0)).unwrap().total_cents(), Some(37_500));
}

#[test]
fn total_price_overflow_is_reported() {
    let booking = Booking {
        nights: 3,
        price_cents: u64::MAX / 2,
        ..persisted(0, "Alice")
    };
    assert_eq!(booking.total_cents(), None);
}
