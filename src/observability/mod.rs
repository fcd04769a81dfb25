//! Tracing initialization.
//!
//! The core reports absorbed I/O failures (feed fetch, preference writes)
//! through `tracing` rather than surfacing them to presentation, so hosts
//! that want to see those events need a subscriber installed. This module
//! wires up a standard fmt subscriber with env-filter support.
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
