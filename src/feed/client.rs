//! Job feed port and its HTTP adapter.
//!
//! [`JobFeed`] is the async seam between the store and the remote listing
//! endpoint. The production adapter, [`HttpJobFeed`], performs one GET per
//! invocation with at-most-one-attempt semantics: no retry, no backoff, and
//! no timeout unless one is configured explicitly. Refreshes are triggered by
//! explicit caller action, never by a timer.

use crate::domain::error::Result;
use crate::domain::Job;
use crate::feed::normalize;
use crate::Config;
use async_trait::async_trait;

/// Abstraction over the remote job listing feed.
///
/// Implementations fetch the raw payload, normalize it, and return the jobs
/// in the order received. Test doubles substitute canned collections or
/// failures without any network involvement.
#[async_trait]
pub trait JobFeed: Send + Sync {
    /// Performs a single read of the listing endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, malformed
    /// JSON, or a payload without a job sequence. The caller decides what the
    /// failure means for existing state; this trait only reports it.
    async fn fetch_jobs(&self) -> Result<Vec<Job>>;
}

/// HTTP adapter for [`JobFeed`] backed by `reqwest`.
pub struct HttpJobFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpJobFeed {
    /// Builds the adapter from configuration.
    ///
    /// Applies `config.request_timeout` to the underlying client when set;
    /// otherwise requests wait indefinitely, matching the feed contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: config.feed_url.clone(),
        })
    }
}

#[async_trait]
impl JobFeed for HttpJobFeed {
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        tracing::debug!(url = %self.url, "fetching job feed");

        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let payload: serde_json::Value = response.json().await?;

        let jobs = normalize::parse_feed(&payload)?;
        tracing::debug!(count = jobs.len(), "feed fetch complete");
        Ok(jobs)
    }
}
