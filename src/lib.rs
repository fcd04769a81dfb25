//! Jobdeck: the embedded data/state core of a mobile job-board client.
//!
//! Jobdeck owns everything between the remote job feed and the screens:
//! - Fetching and normalizing the listing feed into a stable local model
//! - The in-memory job store with its loading flag and refresh operation
//! - The session-local bookmark set
//! - Theme state with a persisted dark-mode preference
//! - The search filter over the job collection
//! - The application-submission validation contract
//!
//! Presentation (screens, navigation, form widgets) is an external
//! collaborator: it consumes the store's read accessors and invokes its
//! mutation operations, nothing more.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (external collaborator)               │
//! └─────────────────────────────────────────────────────┘
//!                        │ reads / mutations
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - GlobalStore: jobs, loading, bookmarks, theme     │
//! │  - Search filter                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                            │
//! ┌───────────────────┐      ┌───────────────────────┐
//! │ Feed Layer        │      │ Storage Layer         │
//! │ (feed/)           │      │ (storage/)            │
//! │ - HTTP fetch      │      │ - PreferenceStore     │
//! │ - Normalization   │      │ - JSON / memory impls │
//! └───────────────────┘      └───────────────────────┘
//!         │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Job model, application contract, error types     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Error propagation
//!
//! Asynchronous I/O failures are absorbed at their origin and logged via
//! `tracing`: a failed refresh leaves the previous collection untouched, a
//! failed preference write leaves the in-memory flag authoritative. The only
//! failures that reach the caller are application validation errors, which
//! are expected and recoverable by re-input.
//!
//! # Example
//!
//! ```no_run
//! use jobdeck::{Config, GlobalStore, HttpJobFeed, MemoryPreferenceStore};
//! use std::sync::Arc;
//!
//! # async fn run() -> jobdeck::Result<()> {
//! let config = Config::default();
//! let feed = Arc::new(HttpJobFeed::new(&config)?);
//! let prefs = Arc::new(MemoryPreferenceStore::new());
//!
//! let mut store = GlobalStore::new(feed, prefs);
//! store.load_preferences().await;
//! store.refresh().await;
//!
//! let results = store.search("rust");
//! let theme = store.theme();
//! # Ok(())
//! # }
//! ```
//!
//! # Known limitations
//!
//! - Records arriving without an upstream id get a synthesized UUID that is
//!   not stable across refetches; bookmarks against such ids stop resolving
//!   after the next refresh. Preserved deliberately pending a decision from
//!   the upstream data-contract owner.
//! - No timeout is applied to feed requests unless [`Config::request_timeout`]
//!   is set; an unresponsive endpoint leaves `loading` set indefinitely.

pub mod app;
pub mod domain;
pub mod feed;
pub mod storage;

pub mod observability;

pub use app::{filter_jobs, BookmarkSet, GlobalStore, Theme, DARK_MODE_KEY};
pub use domain::{ApplicationField, ApplicationPayload, Job, JobdeckError, Result, ValidationErrors};
pub use feed::{HttpJobFeed, JobFeed};
pub use storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};

use std::sync::Arc;
use std::time::Duration;

/// Default listing endpoint queried by [`HttpJobFeed`].
pub const DEFAULT_FEED_URL: &str = "https://empllo.com/api/v1";

/// Core configuration supplied by the embedding host.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote job feed endpoint.
    ///
    /// One HTTP GET per refresh; no authentication, query parameters, or
    /// pagination cursor. Default: [`DEFAULT_FEED_URL`].
    pub feed_url: String,

    /// Optional per-request timeout for feed fetches.
    ///
    /// The feed contract itself enforces no timeout; leaving this `None`
    /// preserves that behavior, at the cost of `loading` staying set for as
    /// long as an unresponsive endpoint keeps the request open. Default: `None`.
    pub request_timeout: Option<Duration>,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout: None,
            trace_level: None,
        }
    }
}

/// Builds a ready-to-use [`GlobalStore`] against the HTTP feed.
///
/// Convenience entry point for embedding hosts: constructs the feed adapter
/// from `config`, wires it to the given preference store, and performs the
/// one-time startup preference read. The returned store still reports
/// `loading == true`; trigger [`GlobalStore::refresh`] from the first screen
/// mount.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed. Preference
/// read failures fall back to defaults per the propagation policy.
pub async fn initialize(
    config: &Config,
    preferences: Arc<dyn PreferenceStore>,
) -> Result<GlobalStore> {
    tracing::debug!(feed_url = %config.feed_url, "initializing jobdeck core");

    let feed = Arc::new(HttpJobFeed::new(config)?);
    let mut store = GlobalStore::new(feed, preferences);
    store.load_preferences().await;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_public_feed() {
        let config = Config::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert!(config.request_timeout.is_none());
    }

    #[tokio::test]
    async fn initialize_seeds_preferences_and_stays_loading() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(DARK_MODE_KEY, "true").await.unwrap();

        let store = initialize(&Config::default(), prefs).await.unwrap();
        assert!(store.loading());
        assert!(store.is_dark_mode());
        assert!(store.jobs().is_empty());
    }
}
