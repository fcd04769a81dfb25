//! Domain layer for the jobdeck core.
//!
//! This module contains the core domain types and business rules of the
//! job-board client, independent of transport or persistence concerns. It
//! follows domain-driven design principles by keeping business rules isolated
//! from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Normalized job listing model
//! - [`application`]: Application payload and validation contract
//!
//! # Examples
//!
//! ```
//! use jobdeck::domain::{ApplicationPayload, Job};
//!
//! let job = Job::with_id("backend-42");
//! let payload = ApplicationPayload::default();
//! assert!(payload.validate().is_err());
//! ```

pub mod application;
pub mod error;
pub mod job;

pub use application::{ApplicationField, ApplicationPayload, ValidationErrors};
pub use error::{JobdeckError, Result};
pub use job::Job;
