//! Field validation shared by the submission endpoint and the form page
//! script (which mirrors the same rules in the browser).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Attachment, Submission};

/// Mapping from form field name to a human-readable error message. An empty
/// mapping means the submission is valid.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Apply every rule independently and collect all violations.
pub fn validate(submission: &Submission) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if submission.first_name.trim().is_empty() {
        errors.insert("firstName", "First name is required");
    }

    if submission.min_budget.is_none() {
        errors.insert("minBudget", "Min budget must be a number");
    }
    if submission.max_budget.is_none() {
        errors.insert("maxBudget", "Max budget must be a number");
    }
    if let (Some(min), Some(max)) = (submission.min_budget, submission.max_budget) {
        if min > max {
            errors.insert(
                "maxBudget",
                "Max budget must be greater than or equal to min budget",
            );
        }
    }

    if too_large(submission.cv.as_ref()) {
        errors.insert("cv", "File size exceeds 10MB");
    }
    if too_large(submission.rate_card.as_ref()) {
        errors.insert("rateCard", "File size exceeds 10MB");
    }

    errors
}

fn too_large(attachment: Option<&Attachment>) -> bool {
    attachment.is_some_and(Attachment::oversized)
}
