/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use customer_index::IndexError;
use thiserror::Error;

use crate::BookingId;

/// Errors returned by [`BookingStore`](crate::BookingStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no booking with id {0}")]
    BookingNotFound(BookingId),
    /// Two persisted bookings share an id.
    #[error("booking id {0} appears more than once")]
    DuplicateBookingId(BookingId),
    /// Every booking id up to `u64::MAX` has been assigned.
    #[error("no booking ids left to assign")]
    IdSpaceExhausted,
    #[error("customer name is empty")]
    InvalidCustomerName,
    #[error(transparent)]
    Index(#[from] IndexError),
}
