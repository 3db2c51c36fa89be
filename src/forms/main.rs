use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::{Attachment, Submission, normalize_currency, parse_budget};

/// Multipart payload of the vendor submission form. Every field is optional
/// at the transport layer; the validator decides what is required.
#[derive(MultipartForm)]
pub struct VendorForm {
    #[multipart(rename = "firstName")]
    pub first_name: Option<Text<String>>,
    #[multipart(rename = "lastName")]
    pub last_name: Option<Text<String>>,
    pub company: Option<Text<String>>,
    pub email: Option<Text<String>>,
    #[multipart(rename = "resourceList")]
    pub resource_list: Option<Text<String>>,
    pub currency: Option<Text<String>>,
    #[multipart(rename = "minBudget")]
    pub min_budget: Option<Text<String>>,
    #[multipart(rename = "maxBudget")]
    pub max_budget: Option<Text<String>>,
    pub cv: Option<TempFile>,
    #[multipart(rename = "rateCard")]
    pub rate_card: Option<TempFile>,
}

impl VendorForm {
    /// Trim the text fields, parse the budgets and reduce the file parts to
    /// their metadata. The temporary files are dropped here, unread.
    pub fn into_submission(self) -> Submission {
        Submission {
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            company: trimmed(self.company),
            email: trimmed(self.email),
            resource_list: trimmed(self.resource_list),
            currency: normalize_currency(&self.currency.map(|text| text.0).unwrap_or_default()),
            min_budget: self.min_budget.and_then(|text| parse_budget(&text.0)),
            max_budget: self.max_budget.and_then(|text| parse_budget(&text.0)),
            cv: self.cv.map(attachment),
            rate_card: self.rate_card.map(attachment),
        }
    }
}

fn trimmed(field: Option<Text<String>>) -> String {
    field
        .map(|text| text.0.trim().to_string())
        .unwrap_or_default()
}

fn attachment(file: TempFile) -> Attachment {
    Attachment::new(file.file_name, file.size as u64)
}
