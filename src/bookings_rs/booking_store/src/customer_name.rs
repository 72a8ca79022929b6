/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::{fmt, ops::Deref};

use icu_casemap::CaseMapper;
use icu_casemap::options::TitlecaseOptions;
use icu_locale_core::langid;

use crate::StoreError;

/// A customer name in the canonical form the index compares.
///
/// Normalization trims the input, collapses every run of whitespace into a
/// single space and title-cases each word, so `"  aLICE   smith "` becomes
/// `"Alice Smith"`. Title-casing uses `icu_casemap`, which handles letters
/// outside ASCII (`"élodie"` becomes `"Élodie"`).
///
/// Names that are empty after trimming are rejected.
///
/// ```
/// use booking_store::CustomerName;
///
/// let name = CustomerName::new("  aLICE   smith ").unwrap();
/// assert_eq!(name.as_str(), "Alice Smith");
/// assert!(CustomerName::new(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    /// Normalizes `input` into a customer name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCustomerName`] if `input` contains only whitespace.
    pub fn new<T: AsRef<str>>(input: T) -> Result<Self, StoreError> {
        let normalized = normalize(input.as_ref());
        if normalized.is_empty() {
            return Err(StoreError::InvalidCustomerName);
        }
        Ok(Self(normalized))
    }

    /// Returns the inner string as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize(input: &str) -> String {
    let casemapper = CaseMapper::new();
    let root = langid!("und");

    let mut normalized = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&casemapper.titlecase_segment_with_only_case_data_to_string(
            word,
            &root,
            TitlecaseOptions::default(),
        ));
    }
    normalized
}

impl TryFrom<&str> for CustomerName {
    type Error = StoreError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}

impl Deref for CustomerName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
