/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::collections::HashSet;
use std::rc::Rc;

use customer_index::BalancedIndex;

use crate::{Booking, BookingId, CustomerName, NewBooking, StoreError};

/// Bookings in creation order, indexed by customer name.
///
/// The flat list is what reports iterate and what persistence writes back;
/// the index answers "all bookings of customer X" and produces the list
/// sorted by customer without re-sorting it.
///
/// # Example
///
/// ```
/// use booking_store::{BookingStore, NewBooking};
///
/// let mut store = BookingStore::new();
/// let first = store.add_booking(NewBooking {
///     customer: "bob".into(),
///     package: "Spa weekend".into(),
///     ..Default::default()
/// })?;
/// store.add_booking(NewBooking { customer: "alice".into(), ..Default::default() })?;
///
/// let customers: Vec<&str> = store.customers().collect();
/// assert_eq!(customers, ["Alice", "Bob"]);
///
/// store.rename_customer(first, "Carol")?;
/// assert_eq!(store.bookings_for("carol")?[0].package, "Spa weekend");
/// # Ok::<(), booking_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct BookingStore {
    bookings: Vec<Rc<Booking>>,
    index: BalancedIndex<Rc<Booking>>,
    /// `None` once id `u64::MAX` has been handed out or loaded.
    next_id: Option<u64>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            index: BalancedIndex::new(),
            next_id: Some(0),
        }
    }
}

impl BookingStore {
    /// Create an empty store. The first booking gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted bookings, keeping their ids and order.
    ///
    /// Customer names are already normalized, since a [`CustomerName`] can
    /// only be built through normalization. The next assigned id follows the
    /// largest loaded one; after loading id `u64::MAX` no further bookings
    /// can be added.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateBookingId`] if two bookings share an id.
    pub fn from_bookings<I>(bookings: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Booking>,
    {
        let mut store = Self::new();
        let mut seen = HashSet::new();
        for booking in bookings {
            if !seen.insert(booking.id) {
                return Err(StoreError::DuplicateBookingId(booking.id));
            }
            store.next_id = store
                .next_id
                .zip(booking.id.get().checked_add(1))
                .map(|(next, following)| next.max(following));
            store.push(Rc::new(booking));
        }
        tracing::debug!(
            bookings = store.len(),
            customers = store.index.num_keys(),
            "rebuilt booking store"
        );
        Ok(store)
    }

    /// Record a new booking and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCustomerName`] if the customer name is
    /// blank, and [`StoreError::IdSpaceExhausted`] once every id has been
    /// used. No id is consumed on error.
    pub fn add_booking(&mut self, booking: NewBooking) -> Result<BookingId, StoreError> {
        let customer = CustomerName::new(&booking.customer)?;
        let raw = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        let id = BookingId::new(raw);
        self.next_id = raw.checked_add(1);

        tracing::debug!(%id, %customer, "adding booking");
        self.push(Rc::new(booking.into_booking(id, customer)));
        Ok(id)
    }

    fn push(&mut self, booking: Rc<Booking>) {
        self.index.insert(Rc::clone(&booking));
        self.bookings.push(booking);
    }

    /// Remove a booking from the index and the flat list, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BookingNotFound`] for an unknown id. Index failures
    /// are returned as [`StoreError::Index`]; the flat list is left untouched
    /// in that case.
    pub fn remove_booking(&mut self, id: BookingId) -> Result<Rc<Booking>, StoreError> {
        let position = self.position(id)?;
        self.index.delete(&self.bookings[position])?;

        let booking = self.bookings.remove(position);
        tracing::debug!(%id, customer = %booking.customer, "removed booking");
        Ok(booking)
    }

    /// Change the customer name of a booking.
    ///
    /// The booking leaves the chain of its old name and is appended to the
    /// chain of the new one, so it sorts after the bookings the new customer
    /// already had. Renaming to the current name (after normalization) does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BookingNotFound`] for an unknown id,
    /// [`StoreError::InvalidCustomerName`] for a blank name, and
    /// [`StoreError::Index`] if the index does not hold the booking under its
    /// current name. Nothing changes on error.
    pub fn rename_customer(&mut self, id: BookingId, new_name: &str) -> Result<(), StoreError> {
        let customer = CustomerName::new(new_name)?;
        let position = self.position(id)?;
        let current = &self.bookings[position];
        if current.customer == customer {
            return Ok(());
        }

        let renamed = Rc::new(Booking {
            customer,
            ..Booking::clone(current)
        });
        tracing::debug!(%id, from = %current.customer, to = %renamed.customer, "renaming customer");

        self.index.move_record(Rc::clone(&renamed), &current.customer)?;
        self.bookings[position] = renamed;
        Ok(())
    }

    /// The booking with the given id.
    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|booking| booking.id == id)
            .map(Rc::as_ref)
    }

    /// Every booking, in creation order.
    pub fn bookings(&self) -> &[Rc<Booking>] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Bookings of one customer, oldest first. The query is normalized like
    /// stored names, so `"  alice "` finds `"Alice"`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCustomerName`] for a blank query and
    /// [`StoreError::Index`] if the customer has no bookings.
    pub fn bookings_for(&self, customer: &str) -> Result<Vec<&Booking>, StoreError> {
        let customer = CustomerName::new(customer)?;
        let bookings = self.index.find(&customer).inspect_err(|_| {
            tracing::warn!(%customer, "no bookings for customer");
        })?;
        Ok(bookings.into_iter().map(Rc::as_ref).collect())
    }

    /// Every booking ordered by customer name. Bookings of one customer stay
    /// in creation order in both directions.
    pub fn sorted_by_customer(&self, descending: bool) -> Vec<&Booking> {
        self.index
            .sorted_records(descending)
            .into_iter()
            .map(Rc::as_ref)
            .collect()
    }

    /// Distinct customer names, ascending.
    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.index.keys()
    }

    /// The customer index backing this store.
    pub fn index(&self) -> &BalancedIndex<Rc<Booking>> {
        &self.index
    }

    fn position(&self, id: BookingId) -> Result<usize, StoreError> {
        self.bookings
            .iter()
            .position(|booking| booking.id == id)
            .ok_or_else(|| {
                tracing::warn!(%id, "unknown booking");
                StoreError::BookingNotFound(id)
            })
    }
}
