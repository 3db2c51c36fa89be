//! Submission processing: validate, then acknowledge. Nothing is persisted.

use log::debug;

use crate::domain::Submission;
use crate::dto::SubmissionSummary;
use crate::services::{ServiceError, ServiceResult, validation};

/// Run the shared validator over a submission and build the acknowledgement
/// summary echoed back to the caller.
pub fn process(submission: Submission) -> ServiceResult<SubmissionSummary> {
    let errors = validation::validate(&submission);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let (Some(min_budget), Some(max_budget)) = (submission.min_budget, submission.max_budget)
    else {
        return Err(ServiceError::Invariant(
            "budgets parsed after successful validation",
        ));
    };

    if let Some(cv) = &submission.cv {
        debug!("cv attachment: name={:?} size={}", cv.file_name, cv.size);
    }
    if let Some(rate_card) = &submission.rate_card {
        debug!(
            "rate card attachment: name={:?} size={}",
            rate_card.file_name, rate_card.size
        );
    }

    Ok(SubmissionSummary {
        has_cv: submission.has_cv(),
        has_rate_card: submission.has_rate_card(),
        first_name: submission.first_name,
        last_name: submission.last_name,
        company: submission.company,
        email: submission.email,
        resource_list: submission.resource_list,
        currency: submission.currency,
        min_budget,
        max_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attachment;

    #[test]
    fn echoes_fields_in_the_summary() {
        let submission = Submission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Acme Vendors Ltd".to_string(),
            email: "jane@example.com".to_string(),
            resource_list: "2x Frontend, 1x QA".to_string(),
            currency: "EUR".to_string(),
            min_budget: Some(1000.0),
            max_budget: Some(5000.0),
            cv: Some(Attachment::new(Some("cv.pdf".to_string()), 1024)),
            rate_card: None,
        };

        let summary = process(submission).unwrap();
        assert_eq!(summary.first_name, "Jane");
        assert_eq!(summary.last_name, "Doe");
        assert_eq!(summary.company, "Acme Vendors Ltd");
        assert_eq!(summary.email, "jane@example.com");
        assert_eq!(summary.resource_list, "2x Frontend, 1x QA");
        assert_eq!(summary.currency, "EUR");
        assert_eq!(summary.min_budget, 1000.0);
        assert_eq!(summary.max_budget, 5000.0);
        assert!(summary.has_cv);
        assert!(!summary.has_rate_card);
    }

    #[test]
    fn placeholder_parts_are_reported_as_absent() {
        let submission = Submission {
            first_name: "Jane".to_string(),
            currency: "USD".to_string(),
            min_budget: Some(100.0),
            max_budget: Some(200.0),
            cv: Some(Attachment::new(Some(String::new()), 0)),
            ..Submission::default()
        };

        let summary = process(submission).unwrap();
        assert!(!summary.has_cv);
        assert!(!summary.has_rate_card);
    }

    #[test]
    fn rejects_an_invalid_submission_with_the_error_mapping() {
        let submission = Submission {
            first_name: String::new(),
            min_budget: Some(1000.0),
            max_budget: Some(500.0),
            ..Submission::default()
        };

        match process(submission) {
            Err(ServiceError::Validation(errors)) => {
                assert_eq!(errors.get("firstName"), Some("First name is required"));
                assert_eq!(
                    errors.get("maxBudget"),
                    Some("Max budget must be greater than or equal to min budget")
                );
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
