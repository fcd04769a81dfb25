//! Job Feed Client: remote fetch and normalization.
//!
//! This module owns the boundary with the remote listing endpoint. It fetches
//! the raw JSON payload over HTTP and converts it into the canonical
//! [`Job`](crate::domain::Job) collection, in the order received, applying the
//! per-field defaulting rules documented in [`normalize`].
//!
//! Fetch failures are reported to the caller as errors; the store decides that
//! a failed refresh leaves the previous collection untouched. The client never
//! retries on its own.
//!
//! # Modules
//!
//! - [`client`]: the [`JobFeed`] port and its `reqwest`-backed adapter
//! - [`normalize`]: raw record to [`Job`](crate::domain::Job) conversion

pub mod client;
pub mod normalize;

pub use client::{HttpJobFeed, JobFeed};
pub use normalize::parse_feed;
