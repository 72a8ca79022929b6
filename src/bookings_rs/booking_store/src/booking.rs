/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::fmt;

use customer_index::IndexedRecord;

use crate::CustomerName;

/// Store-assigned booking identity. Ids increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingId(u64);

impl BookingId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hotel package booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub customer: CustomerName,
    pub package: String,
    pub guests: u32,
    pub nights: u32,
    /// Package price per night, in cents.
    pub price_cents: u64,
}

impl Booking {
    /// Price of the whole stay, in cents, or `None` if it does not fit in a `u64`.
    pub fn total_cents(&self) -> Option<u64> {
        self.price_cents.checked_mul(u64::from(self.nights))
    }
}

impl IndexedRecord for Booking {
    type Id = BookingId;

    fn sort_key(&self) -> &str {
        self.customer.as_str()
    }

    fn record_id(&self) -> BookingId {
        self.id
    }
}

/// The caller-supplied part of a booking. The store assigns the id and
/// normalizes the customer name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBooking {
    pub customer: String,
    pub package: String,
    pub guests: u32,
    pub nights: u32,
    pub price_cents: u64,
}

impl NewBooking {
    pub(crate) fn into_booking(self, id: BookingId, customer: CustomerName) -> Booking {
        Booking {
            id,
            customer,
            package: self.package,
            guests: self.guests,
            nights: self.nights,
            price_cents: self.price_cents,
        }
    }
}
