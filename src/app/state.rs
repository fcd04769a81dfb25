//! Central session state for the job-board client.
//!
//! This module defines [`GlobalStore`], the single-instance-per-session state
//! container that presentation reads from and mutates through. It replaces the
//! hidden-global provider pattern with an explicit store object: consumers hold
//! a reference to the store, call its mutation operations, and re-read after a
//! mutation completes. No notification mechanism is baked in; the contract is
//! "mutation completes, then a fresh read reflects the new value".
//!
//! # State components
//!
//! - **Jobs**: current normalized collection, replaced wholesale by each refresh
//! - **Loading**: true from store creation until the first fetch settles
//! - **Bookmarks**: session-local membership set of job ids
//! - **Dark mode**: boolean source of truth for the derived [`Theme`]
//!
//! # Concurrency
//!
//! The store runs on one logical execution context; feed fetches and
//! preference I/O are the only suspension points. Mutating operations take
//! `&mut self`, so overlapping refreshes cannot be issued against one store:
//! a fetch settles and publishes its result before the next can start.

use crate::app::bookmarks::BookmarkSet;
use crate::app::search;
use crate::app::theme::Theme;
use crate::domain::{ApplicationPayload, Job, ValidationErrors};
use crate::feed::JobFeed;
use crate::storage::PreferenceStore;
use std::sync::Arc;

/// Preference key under which the dark-mode flag is persisted.
///
/// The value is the textual boolean, `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Session-wide state container.
///
/// Owns the job collection, the loading flag, the bookmark set, and the
/// dark-mode flag, plus the injected feed and preference-store adapters.
/// All I/O failures are absorbed here: a failed refresh leaves the previous
/// collection untouched and a failed preference write leaves the in-memory
/// flag authoritative. The only failures surfaced to callers are application
/// validation errors, which are expected and recoverable.
pub struct GlobalStore {
    /// Current job collection, in feed order. Replaced atomically on refresh.
    jobs: Vec<Job>,

    /// True until the first fetch settles, success or failure.
    loading: bool,

    /// Session-local bookmark membership.
    bookmarks: BookmarkSet,

    /// Source of truth for the derived theme.
    is_dark_mode: bool,

    feed: Arc<dyn JobFeed>,
    preferences: Arc<dyn PreferenceStore>,
}

impl GlobalStore {
    /// Creates a store with an empty collection and `loading` set.
    ///
    /// The dark-mode flag starts at `false` (light); call
    /// [`load_preferences`](Self::load_preferences) once at startup to seed it
    /// from the preference store.
    #[must_use]
    pub fn new(feed: Arc<dyn JobFeed>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            bookmarks: BookmarkSet::new(),
            is_dark_mode: false,
            feed,
            preferences,
        }
    }

    /// Seeds the dark-mode flag from the preference store.
    ///
    /// One-time startup read of [`DARK_MODE_KEY`]. A missing, corrupt, or
    /// unreadable value falls back to `false` (light) without error; failures
    /// are logged and never propagated.
    pub async fn load_preferences(&mut self) {
        match self.preferences.get(DARK_MODE_KEY).await {
            Ok(Some(value)) => match value.parse::<bool>() {
                Ok(flag) => {
                    self.is_dark_mode = flag;
                    tracing::debug!(is_dark_mode = flag, "theme preference loaded");
                }
                Err(_) => {
                    tracing::warn!(value = %value, "corrupt theme preference, using light");
                }
            },
            Ok(None) => {
                tracing::debug!("no theme preference stored, using light");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load theme preference, using light");
            }
        }
    }

    /// Re-fetches the job feed and replaces the collection on success.
    ///
    /// On transport or shape failure the previous collection is left
    /// untouched and the error is logged, not raised; the caller learns
    /// "nothing changed" from the state itself. Either way `loading` is
    /// cleared after the call settles, strictly after any replacement, so a
    /// reader never observes `loading == false` alongside a half-applied
    /// collection.
    ///
    /// At-most-one-attempt semantics: no retry, no backoff. Refresh is
    /// triggered by explicit caller action, not a timer.
    pub async fn refresh(&mut self) {
        match self.feed.fetch_jobs().await {
            Ok(jobs) => {
                tracing::debug!(count = jobs.len(), "job collection replaced");
                self.jobs = jobs;
            }
            Err(e) => {
                tracing::warn!(error = %e, "feed refresh failed, keeping previous collection");
            }
        }
        self.loading = false;
    }

    /// Current job collection, in feed order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// True until the first fetch settles.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Current dark-mode flag.
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// Theme derived from the dark-mode flag, recomputed on every read.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.is_dark_mode)
    }

    /// Flips dark mode and persists the new flag.
    ///
    /// The in-memory flag flips synchronously and is authoritative for the
    /// running session; the preference write happens afterwards and its
    /// failure is caught and logged, never propagated.
    pub async fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        let encoded = self.is_dark_mode.to_string();
        tracing::debug!(is_dark_mode = self.is_dark_mode, "dark mode toggled");

        if let Err(e) = self.preferences.set(DARK_MODE_KEY, &encoded).await {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    }

    /// Bookmarks a job id; adding an already-present id is a no-op.
    pub fn add_bookmark(&mut self, job_id: &str) {
        self.bookmarks.add(job_id);
    }

    /// Removes a bookmark; removing an absent id is a no-op.
    pub fn remove_bookmark(&mut self, job_id: &str) {
        self.bookmarks.remove(job_id);
    }

    /// True when the id is currently bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, job_id: &str) -> bool {
        self.bookmarks.contains(job_id)
    }

    /// Bookmarked ids in bookmark-add order.
    #[must_use]
    pub fn bookmarked_ids(&self) -> &[String] {
        self.bookmarks.ids()
    }

    /// Bookmarked jobs from the current collection, in collection order.
    ///
    /// Ids whose jobs have left the feed are skipped, never surfaced; the set
    /// retains them until the user removes the bookmark explicitly.
    #[must_use]
    pub fn bookmarked_jobs(&self) -> Vec<Job> {
        self.bookmarks.select(&self.jobs)
    }

    /// Filters the current collection by a search query.
    ///
    /// See [`filter_jobs`](crate::app::filter_jobs) for the matching contract.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Job> {
        search::filter_jobs(&self.jobs, query)
    }

    /// Validates an application and hands it to the submission callback.
    ///
    /// On success the validated payload and target job id are passed to
    /// `submit` (the actual network submission belongs to the collaborator,
    /// not the core) and `Ok(())` is returned. On failure the callback is
    /// not invoked and the field-keyed errors are returned for the form to
    /// display. No partial-submission state is retained either way.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when any field fails its rule.
    pub fn submit_application<F>(
        &self,
        job_id: &str,
        payload: &ApplicationPayload,
        submit: F,
    ) -> Result<(), ValidationErrors>
    where
        F: FnOnce(&str, &ApplicationPayload),
    {
        payload.validate()?;
        tracing::debug!(job_id = %job_id, "application validated, handing off");
        submit(job_id, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{JobdeckError, Result as CoreResult};
    use crate::domain::ApplicationField;
    use crate::storage::MemoryPreferenceStore;
    use async_trait::async_trait;
    use std::cell::Cell;

    /// Feed double returning a fixed collection.
    struct StaticFeed(Vec<Job>);

    #[async_trait]
    impl JobFeed for StaticFeed {
        async fn fetch_jobs(&self) -> CoreResult<Vec<Job>> {
            Ok(self.0.clone())
        }
    }

    /// Feed double failing every call, as an unreachable endpoint would.
    struct FailingFeed;

    #[async_trait]
    impl JobFeed for FailingFeed {
        async fn fetch_jobs(&self) -> CoreResult<Vec<Job>> {
            Err(JobdeckError::Feed("boom".to_string()))
        }
    }

    fn store_with(feed: Arc<dyn JobFeed>) -> GlobalStore {
        GlobalStore::new(feed, Arc::new(MemoryPreferenceStore::new()))
    }

    fn jobs(ids: &[&str]) -> Vec<Job> {
        ids.iter().map(|id| Job::with_id(*id)).collect()
    }

    #[test]
    fn starts_loading_with_an_empty_collection() {
        let store = store_with(Arc::new(StaticFeed(vec![])));
        assert!(store.loading());
        assert!(store.jobs().is_empty());
        assert!(!store.is_dark_mode());
    }

    #[tokio::test]
    async fn successful_refresh_replaces_the_collection_and_clears_loading() {
        let mut store = store_with(Arc::new(StaticFeed(jobs(&["a", "b"]))));
        store.refresh().await;

        assert!(!store.loading());
        assert_eq!(store.jobs().len(), 2);
        assert_eq!(store.jobs()[0].id, "a");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_collection() {
        let mut store = store_with(Arc::new(StaticFeed(jobs(&["a"]))));
        store.refresh().await;
        assert_eq!(store.jobs().len(), 1);

        store.feed = Arc::new(FailingFeed);
        store.refresh().await;

        assert_eq!(store.jobs().len(), 1, "collection must survive a failed refresh");
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn failed_first_refresh_leaves_collection_empty_and_clears_loading() {
        let mut store = store_with(Arc::new(FailingFeed));
        store.refresh().await;

        assert!(store.jobs().is_empty());
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn toggle_flips_theme_and_persists_the_flag() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        let mut store = GlobalStore::new(Arc::new(StaticFeed(vec![])), prefs.clone());

        assert_eq!(store.theme(), Theme::light());
        store.toggle_dark_mode().await;

        assert_eq!(store.theme(), Theme::dark());
        assert_eq!(prefs.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("true"));

        store.toggle_dark_mode().await;
        assert_eq!(store.theme(), Theme::light());
        assert_eq!(prefs.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn load_preferences_seeds_the_flag() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(DARK_MODE_KEY, "true").await.unwrap();

        let mut store = GlobalStore::new(Arc::new(StaticFeed(vec![])), prefs);
        store.load_preferences().await;

        assert!(store.is_dark_mode());
        assert_eq!(store.theme(), Theme::dark());
    }

    #[tokio::test]
    async fn corrupt_preference_falls_back_to_light() {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        prefs.set(DARK_MODE_KEY, "sometimes").await.unwrap();

        let mut store = GlobalStore::new(Arc::new(StaticFeed(vec![])), prefs);
        store.load_preferences().await;

        assert!(!store.is_dark_mode());
    }

    #[tokio::test]
    async fn bookmarked_jobs_follow_store_order_and_skip_orphans() {
        let mut store = store_with(Arc::new(StaticFeed(jobs(&["a", "b", "c"]))));
        store.refresh().await;

        store.add_bookmark("c");
        store.add_bookmark("a");
        store.add_bookmark("vanished");

        let listed = store.bookmarked_jobs();
        let ids: Vec<&str> = listed.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(store.is_bookmarked("vanished"));
    }

    #[tokio::test]
    async fn refresh_can_drop_bookmarked_jobs_from_the_listing() {
        let mut store = store_with(Arc::new(StaticFeed(jobs(&["a", "b"]))));
        store.refresh().await;
        store.add_bookmark("b");

        store.feed = Arc::new(StaticFeed(jobs(&["a"])));
        store.refresh().await;

        assert!(store.bookmarked_jobs().is_empty());
        assert!(store.is_bookmarked("b"), "stale id stays until removed by the user");
    }

    #[test]
    fn submission_invokes_the_callback_only_when_valid() {
        let store = store_with(Arc::new(StaticFeed(vec![])));
        let called = Cell::new(false);

        let payload = ApplicationPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            contact_number: "555".to_string(),
            reason: "because".to_string(),
        };
        let outcome = store.submit_application("job-1", &payload, |job_id, p| {
            called.set(true);
            assert_eq!(job_id, "job-1");
            assert_eq!(p.name, "Ada");
        });
        assert!(outcome.is_ok());
        assert!(called.get());
    }

    #[test]
    fn submission_blocks_on_validation_failure() {
        let store = store_with(Arc::new(StaticFeed(vec![])));
        let called = Cell::new(false);

        let payload = ApplicationPayload {
            email: "not-an-email".to_string(),
            ..ApplicationPayload::default()
        };
        let errors = store
            .submit_application("job-1", &payload, |_, _| called.set(true))
            .unwrap_err();

        assert!(!called.get(), "callback must not run for an invalid payload");
        assert_eq!(errors.get(ApplicationField::Email), Some("Invalid email address"));
    }
}
