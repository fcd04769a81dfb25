//! Bookmark membership tracking.
//!
//! [`BookmarkSet`] tracks which job ids the user has bookmarked during the
//! current session. It is membership only: display order of bookmarked jobs
//! follows the Job Store's collection order, not bookmark-add order, and the
//! set is never persisted across sessions. That is an explicit scope
//! boundary, not an oversight.
//!
//! Ids may outlive their jobs: after a refresh that drops a listing, the set
//! retains the stale id until the user removes it, but selection against the
//! current collection silently skips ids with no matching job.

use crate::domain::Job;

/// Insertion-ordered set of bookmarked job ids.
///
/// `add` is idempotent and `remove` of an absent id is a no-op, so the set
/// never holds duplicates. Insertion order is preserved for callers that want
/// the raw id list, even though job selection uses store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a job id if absent; adding an already-present id changes nothing.
    pub fn add(&mut self, job_id: &str) {
        if !self.contains(job_id) {
            self.ids.push(job_id.to_string());
        }
    }

    /// Deletes a job id if present; removing an absent id changes nothing.
    pub fn remove(&mut self, job_id: &str) {
        self.ids.retain(|id| id != job_id);
    }

    /// True when the id is bookmarked.
    #[must_use]
    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.iter().any(|id| id == job_id)
    }

    /// Number of bookmarked ids, including ids whose jobs have left the feed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is bookmarked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bookmarked ids in bookmark-add order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Selects the bookmarked jobs from a collection, in collection order.
    ///
    /// Ids without a matching job are skipped, never surfaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobdeck::app::BookmarkSet;
    /// use jobdeck::domain::Job;
    ///
    /// let jobs = vec![Job::with_id("a"), Job::with_id("b")];
    /// let mut bookmarks = BookmarkSet::new();
    /// bookmarks.add("b");
    /// bookmarks.add("gone");
    ///
    /// let listed = bookmarks.select(&jobs);
    /// assert_eq!(listed.len(), 1);
    /// assert_eq!(listed[0].id, "b");
    /// ```
    #[must_use]
    pub fn select(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter()
            .filter(|job| self.contains(&job.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_contains() {
        let mut set = BookmarkSet::new();
        set.add("j1");
        assert!(set.contains("j1"));
        assert!(!set.contains("j2"));
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = BookmarkSet::new();
        set.add("j1");
        set.add("j1");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_clears_membership() {
        let mut set = BookmarkSet::new();
        set.add("j1");
        set.remove("j1");
        assert!(!set.contains("j1"));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let mut set = BookmarkSet::new();
        set.add("j1");
        let before = set.clone();
        set.remove("missing");
        assert_eq!(set, before);
    }

    #[test]
    fn ids_keep_add_order() {
        let mut set = BookmarkSet::new();
        set.add("c");
        set.add("a");
        set.add("b");
        assert_eq!(set.ids(), ["c", "a", "b"]);
    }

    #[test]
    fn select_follows_collection_order_not_add_order() {
        let jobs = vec![Job::with_id("a"), Job::with_id("b"), Job::with_id("c")];
        let mut set = BookmarkSet::new();
        set.add("c");
        set.add("a");

        let listed = set.select(&jobs);
        let ids: Vec<&str> = listed.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn select_never_surfaces_orphan_ids() {
        let jobs = vec![Job::with_id("a")];
        let mut set = BookmarkSet::new();
        set.add("a");
        set.add("dropped-by-refresh");

        let listed = set.select(&jobs);
        assert_eq!(listed.len(), 1);
        // The stale id stays in the set until removed explicitly.
        assert!(set.contains("dropped-by-refresh"));
    }
}
