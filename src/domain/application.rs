//! Job application payload and its validation contract.
//!
//! The core does not render forms or perform the submission network call; its
//! responsibility ends at validating an [`ApplicationPayload`] and handing the
//! validated payload plus target job id to an external submission callback.
//! Validation failures are surfaced as field-keyed messages so the form
//! collaborator can attach each message to the offending input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Fields of the application form, used as keys for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationField {
    Name,
    Email,
    ContactNumber,
    Reason,
}

/// A candidate's application to a single job listing.
///
/// All fields are required. The payload is associated with exactly one target
/// job id at submission time; the id travels alongside the payload rather than
/// inside it (see [`GlobalStore::submit_application`](crate::app::GlobalStore::submit_application)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub reason: String,
}

/// Field-keyed validation messages for a rejected application.
///
/// Rules are evaluated independently per field, so one invalid field never
/// suppresses or produces messages for another. Iteration order is stable
/// (keyed by [`ApplicationField`] ordering).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<ApplicationField, String>,
}

impl ValidationErrors {
    /// Returns the message for a field, if that field failed its rule.
    #[must_use]
    pub fn get(&self, field: ApplicationField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// True when every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields that failed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (ApplicationField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: ApplicationField, message: &str) {
        self.fields.insert(field, message.to_string());
    }
}

/// Matches a standard email-address shape: one `@`, non-empty local part,
/// and a domain containing at least one dot. Intentionally permissive beyond
/// that; deliverability is the submission backend's problem.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

impl ApplicationPayload {
    /// Validates every field against its rule.
    ///
    /// Rules:
    /// - `name`: non-empty after trimming
    /// - `email`: non-empty and shaped like an email address
    /// - `contact_number`: non-empty after trimming
    /// - `reason`: non-empty after trimming
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] carrying one message per failed field.
    /// Submission is blocked until all fields pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobdeck::domain::{ApplicationField, ApplicationPayload};
    ///
    /// let payload = ApplicationPayload {
    ///     name: "Ada".into(),
    ///     email: "not-an-email".into(),
    ///     contact_number: "555-0100".into(),
    ///     reason: "I build reliable systems".into(),
    /// };
    ///
    /// let errors = payload.validate().unwrap_err();
    /// assert_eq!(errors.get(ApplicationField::Email), Some("Invalid email address"));
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(ApplicationField::Name, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ApplicationField::Email, "Email is required");
        } else if !email_regex().is_match(email) {
            errors.insert(ApplicationField::Email, "Invalid email address");
        }

        if self.contact_number.trim().is_empty() {
            errors.insert(ApplicationField::ContactNumber, "Contact number is required");
        }

        if self.reason.trim().is_empty() {
            errors.insert(ApplicationField::Reason, "Reason is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
