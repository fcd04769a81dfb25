//! Search filter over the job collection.
//!
//! A pure function from (jobs, query) to a filtered sequence. Matching is
//! deliberately simple: case-insensitive substring against the title, the
//! company name, or any tag. No tokenization, no fuzzy matching, no ranking:
//! source order is preserved rather than re-sorted by relevance, which is
//! exactly what the presentation's flat result list needs.

use crate::domain::Job;

/// Filters a job collection by a search query.
///
/// An empty query returns the collection unchanged: same elements, same
/// order. Otherwise returns the sub-sequence of jobs, in original order,
/// whose lower-cased title, company name, or at least one lower-cased tag
/// contains the lower-cased query as a substring.
///
/// # Examples
///
/// ```
/// use jobdeck::app::filter_jobs;
/// use jobdeck::domain::Job;
///
/// let mut job = Job::with_id("1");
/// job.title = "Senior Rust Engineer".to_string();
///
/// let jobs = vec![job];
/// assert_eq!(filter_jobs(&jobs, "rust").len(), 1);
/// assert_eq!(filter_jobs(&jobs, "cobol").len(), 0);
/// assert_eq!(filter_jobs(&jobs, ""), jobs);
/// ```
#[must_use]
pub fn filter_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    if query.is_empty() {
        return jobs.to_vec();
    }

    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| matches_query(job, &needle))
        .cloned()
        .collect()
}

/// True when a lower-cased needle occurs in the job's title, company name,
/// or any tag. The needle must already be lower-cased.
fn matches_query(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company_name.to_lowercase().contains(needle)
        || job.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
