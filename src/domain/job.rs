//! Job listing domain model.
//!
//! This module defines the canonical [`Job`] type produced by feed normalization.
//! Every job in the store carries a non-empty `id`; records arriving without an
//! upstream identifier are assigned a fresh UUIDv4 at normalization time (see
//! [`crate::feed::normalize`]), which means such ids are not stable across
//! refetches. That is a documented limitation of the upstream data contract,
//! not something the core papers over.

use serde::{Deserialize, Serialize};

/// A single normalized job listing.
///
/// Jobs are created in bulk by one feed fetch and never mutated individually;
/// each refresh replaces the entire collection. All string fields default to
/// the empty string when absent upstream, salaries default to `0`, and the
/// sequence fields default to empty when the upstream value is not a sequence.
///
/// Field names serialize in the upstream camelCase form so a round trip through
/// `serde_json` matches the wire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier within one fetch cycle. Never empty.
    pub id: String,

    /// Listing title, e.g. "Senior Backend Engineer".
    pub title: String,

    /// Free-form description of the role.
    pub description: String,

    /// Top-level category the listing is filed under.
    pub main_category: String,

    /// URL the candidate follows to apply externally.
    pub application_link: String,

    /// Publication date as provided upstream (kept as an opaque string).
    pub pub_date: String,

    /// Expiry date as provided upstream (kept as an opaque string).
    pub expiry_date: String,

    /// Hiring company's display name.
    pub company_name: String,

    /// URL of the company logo image.
    pub company_logo: String,

    /// Employment type, e.g. "Full-time".
    pub job_type: String,

    /// Work arrangement, e.g. "Remote" or "Hybrid".
    pub work_model: String,

    /// Seniority level, e.g. "Mid-level".
    pub seniority_level: String,

    /// Lower salary bound; `0.0` when the upstream value is absent or non-numeric.
    pub min_salary: f64,

    /// Upper salary bound; `0.0` when the upstream value is absent or non-numeric.
    pub max_salary: f64,

    /// Locations the listing applies to, in upstream order.
    pub locations: Vec<String>,

    /// Tags attached to the listing, in upstream order. Searched by the filter.
    pub tags: Vec<String>,
}

impl Job {
    /// Creates an empty job carrying only an identifier.
    ///
    /// Every other field takes its documented default. Normalization starts
    /// from this shape and fills in whatever the raw record provides.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            main_category: String::new(),
            application_link: String::new(),
            pub_date: String::new(),
            expiry_date: String::new(),
            company_name: String::new(),
            company_logo: String::new(),
            job_type: String::new(),
            work_model: String::new(),
            seniority_level: String::new(),
            min_salary: 0.0,
            max_salary: 0.0,
            locations: Vec::new(),
            tags: Vec::new(),
        }
    }
}
