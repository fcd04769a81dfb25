//! Raw feed payload normalization.
//!
//! The remote endpoint is loosely typed: fields come and go, salaries arrive
//! as numbers or numeric strings, and some records lack an identifier
//! entirely. This module converts whatever the endpoint returns into the
//! canonical [`Job`] shape, substituting documented defaults per field and
//! never rejecting a whole record over a malformed field.
//!
//! The only fatal conditions are payload-level: a body that is neither a
//! top-level array nor an object carrying a `jobs` array.

use crate::domain::error::{JobdeckError, Result};
use crate::domain::Job;
use serde_json::Value;
use uuid::Uuid;

/// Extracts and normalizes the job sequence from a decoded feed payload.
///
/// Accepts either a top-level JSON array of raw records or an object with a
/// `jobs` array field, and produces one [`Job`] per record in the order
/// received. Records that are not JSON objects still yield a job (all fields
/// defaulted, fresh id) rather than being dropped, keeping positions aligned
/// with the upstream sequence.
///
/// # Errors
///
/// Returns [`JobdeckError::Feed`] when no job sequence can be located.
pub fn parse_feed(payload: &Value) -> Result<Vec<Job>> {
    let records = match payload {
        Value::Array(records) => records,
        Value::Object(map) => match map.get("jobs") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(JobdeckError::Feed(
                    "no jobs array found in the response".to_string(),
                ))
            }
        },
        _ => {
            return Err(JobdeckError::Feed(
                "no jobs array found in the response".to_string(),
            ))
        }
    };

    let jobs: Vec<Job> = records.iter().map(normalize_record).collect();

    tracing::debug!(count = jobs.len(), "normalized feed payload");
    Ok(jobs)
}

/// Normalizes one raw record into a [`Job`], defaulting missing fields.
///
/// Upstream ids are preserved verbatim when they are strings and rendered in
/// decimal when they are numbers; absent ids get a fresh random UUID. Such
/// synthesized ids are not stable across refetches, which is a known
/// limitation of the upstream contract (a bookmark against a synthesized id
/// stops resolving after the next refresh).
pub fn normalize_record(record: &Value) -> Job {
    let id = record
        .get("id")
        .and_then(value_as_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut job = Job::with_id(id);
    job.title = string_field(record, "title");
    job.description = string_field(record, "description");
    job.main_category = string_field(record, "mainCategory");
    job.application_link = string_field(record, "applicationLink");
    job.pub_date = string_field(record, "pubDate");
    job.expiry_date = string_field(record, "expiryDate");
    job.company_name = string_field(record, "companyName");
    job.company_logo = string_field(record, "companyLogo");
    job.job_type = string_field(record, "jobType");
    job.work_model = string_field(record, "workModel");
    job.seniority_level = string_field(record, "seniorityLevel");
    job.min_salary = numeric_field(record, "minSalary");
    job.max_salary = numeric_field(record, "maxSalary");
    job.locations = sequence_field(record, "locations");
    job.tags = sequence_field(record, "tags");
    job
}

/// Renders an upstream id value as a string: strings pass through unchanged,
/// numbers become their decimal text. Anything else counts as absent.
fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the string value of a field, or the empty string when the field is
/// absent or not a string.
fn string_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Returns the numeric value of a field, accepting JSON numbers and numeric
/// strings, or `0.0` when the field is absent or non-numeric.
fn numeric_field(record: &Value, key: &str) -> f64 {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Returns the string elements of a sequence field in order, or an empty
/// sequence when the field is absent or not an array. Non-string elements
/// inside an array are skipped.
fn sequence_field(record: &Value, key: &str) -> Vec<String> {
    match record.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_top_level_array() {
        let payload = json!([{"id": "a"}, {"id": "b"}]);
        let jobs = parse_feed(&payload).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, "a");
        assert_eq!(jobs[1].id, "b");
    }

    #[test]
    fn parses_object_with_jobs_key() {
        let payload = json!({"jobs": [{"title": "Engineer", "companyName": "Acme"}]});
        let jobs = parse_feed(&payload).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Engineer");
        assert_eq!(jobs[0].company_name, "Acme");
        assert!(!jobs[0].id.is_empty());
        assert_eq!(jobs[0].min_salary, 0.0);
        assert_eq!(jobs[0].max_salary, 0.0);
        assert!(jobs[0].locations.is_empty());
        assert!(jobs[0].tags.is_empty());
    }

    #[test]
    fn rejects_payloads_without_a_job_sequence() {
        for payload in [json!({"items": []}), json!("jobs"), json!(42), json!({"jobs": "nope"})] {
            let err = parse_feed(&payload).unwrap_err();
            assert!(matches!(err, JobdeckError::Feed(_)), "payload: {payload}");
        }
    }

    #[test]
    fn preserves_non_empty_upstream_ids() {
        let job = normalize_record(&json!({"id": "stable-7"}));
        assert_eq!(job.id, "stable-7");
    }

    #[test]
    fn renders_numeric_ids_as_decimal_strings() {
        let job = normalize_record(&json!({"id": 123}));
        assert_eq!(job.id, "123");
    }

    #[test]
    fn synthesizes_fresh_ids_when_absent() {
        let a = normalize_record(&json!({"title": "x"}));
        let b = normalize_record(&json!({"title": "x"}));
        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        // Random per normalization pass; two passes over the same record differ.
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn defaults_missing_fields_per_contract() {
        let job = normalize_record(&json!({"id": "j"}));
        assert_eq!(job.title, "");
        assert_eq!(job.company_name, "");
        assert_eq!(job.pub_date, "");
        assert_eq!(job.min_salary, 0.0);
        assert!(job.locations.is_empty());
        assert!(job.tags.is_empty());
    }

    #[test]
    fn accepts_numeric_strings_for_salaries() {
        let job = normalize_record(&json!({"id": "j", "minSalary": "50000", "maxSalary": 90000.5}));
        assert_eq!(job.min_salary, 50000.0);
        assert_eq!(job.max_salary, 90000.5);
    }

    #[test]
    fn non_numeric_salaries_default_to_zero() {
        let job = normalize_record(&json!({"id": "j", "minSalary": "competitive", "maxSalary": null}));
        assert_eq!(job.min_salary, 0.0);
        assert_eq!(job.max_salary, 0.0);
    }

    #[test]
    fn non_sequence_values_default_to_empty() {
        let job = normalize_record(&json!({"id": "j", "locations": "Remote", "tags": 3}));
        assert!(job.locations.is_empty());
        assert!(job.tags.is_empty());
    }

    #[test]
    fn keeps_sequence_order_and_skips_non_strings() {
        let job = normalize_record(&json!({
            "id": "j",
            "locations": ["Berlin", 1, "Lisbon"],
            "tags": ["rust", "backend"]
        }));
        assert_eq!(job.locations, vec!["Berlin", "Lisbon"]);
        assert_eq!(job.tags, vec!["rust", "backend"]);
    }

    #[test]
    fn record_order_is_preserved() {
        let payload = json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]);
        let jobs = parse_feed(&payload).unwrap();
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
