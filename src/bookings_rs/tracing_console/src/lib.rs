/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A subscriber for the Rust `tracing` ecosystem that writes events to stderr.
//!
//! # Configuring Logging Output
//!
//! Logging output can be configured by setting the `RUST_LOG` environment variable to a _filter_.
//! A filter consists of one or more comma-separated directives which match on `Span`s and `Event`s.
//! Each directive may have a corresponding maximum verbosity [`level`]. Without `RUST_LOG`, or
//! when it fails to parse, events at `INFO` and above are shown.
//!
//! The syntax of a directive is:
//!
//! ```text
//! target[span{field=value}]=level
//! ```
//!
//! Targets are module paths, so `RUST_LOG=customer_index=trace` shows every
//! rotation the index performs while leaving other crates at `INFO`, and
//! `RUST_LOG=booking_store=debug` logs each booking mutation.
//!
//! For details see the [`tracing_subscriber`] documentation.
//!
//! [`level`]: tracing_core::Level
//! [`tracing_subscriber`]: https://docs.rs/tracing-subscriber/0.3.20/tracing_subscriber/filter/struct.EnvFilter.html#directives

use std::error::Error;
use std::io;

use tracing_core::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes a global subscriber that reports traces to stderr.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    try_init().expect("Unable to install global tracing subscriber")
}

/// Initializes a global subscriber that reports traces to stderr if one is
/// not already set.
///
/// # Errors
///
/// Returns an Error if the initialization was unsuccessful, likely because
/// a global subscriber was already installed by another call to `try_init`.
pub fn try_init() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init()
}

/// The filter installed by [`try_init`]: `RUST_LOG` if set and valid, `INFO` otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
