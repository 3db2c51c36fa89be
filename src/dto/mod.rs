use serde::Serialize;

use crate::services::validation::FieldErrors;

/// Echo of an accepted submission, returned to the caller. File contents are
/// never stored or forwarded; only the presence flags survive.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub resource_list: String,
    pub currency: String,
    pub min_budget: f64,
    pub max_budget: f64,
    pub has_cv: bool,
    pub has_rate_card: bool,
}

/// Envelope shared by every response of the submission endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SubmissionSummary>,
}

impl ApiResponse {
    pub fn success(message: &'static str, summary: SubmissionSummary) -> Self {
        Self {
            ok: true,
            message,
            errors: None,
            summary: Some(summary),
        }
    }

    pub fn invalid(message: &'static str, errors: FieldErrors) -> Self {
        Self {
            ok: false,
            message,
            errors: Some(errors),
            summary: None,
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            ok: false,
            message,
            errors: None,
            summary: None,
        }
    }
}
