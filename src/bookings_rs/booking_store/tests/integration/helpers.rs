/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use booking_store::{Booking, BookingId, BookingStore, NewBooking};

pub fn booking(customer: &str, package: &str) -> NewBooking {
    NewBooking {
        customer: customer.to_owned(),
        package: package.to_owned(),
        guests: 2,
        nights: 3,
        price_cents: 12_500,
    }
}

/// A store with one booking per name, ids assigned from 0 in order.
pub fn store_of(customers: &[&str]) -> BookingStore {
    // Set RUST_LOG=booking_store=debug to follow the mutations.
    let _ = tracing_console::try_init();
    let mut store = BookingStore::new();
    for (i, customer) in customers.iter().enumerate() {
        store
            .add_booking(booking(customer, &format!("package {i}")))
            .unwrap();
    }
    store.index().check_invariants();
    store
}

pub fn ids<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<u64> {
    bookings.into_iter().map(|b| b.id.get()).collect()
}

pub fn id(raw: u64) -> BookingId {
    BookingId::new(raw)
}
