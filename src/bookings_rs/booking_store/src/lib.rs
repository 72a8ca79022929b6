/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! In-memory store for hotel package bookings.
//!
//! [`BookingStore`] owns the flat list of bookings, in the order they were
//! made, together with a [`BalancedIndex`](customer_index::BalancedIndex)
//! keyed by [`CustomerName`]. Every write goes to both; reads by customer go
//! through the index.
//!
//! Bookings are shared between the flat list and the index through [`Rc`](std::rc::Rc),
//! so removing a booking from the index never drops it while the list still
//! holds it.

mod booking;
mod customer_name;
mod error;
mod store;

pub use booking::{Booking, BookingId, NewBooking};
pub use customer_name::CustomerName;
pub use error::StoreError;
pub use store::BookingStore;
