//! Domain structures for a single vendor submission.
//!
//! A submission exists only for the duration of one request. Uploaded files
//! are reduced to metadata here; their contents are never kept.

/// Largest accepted attachment, in bytes (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Currency codes offered by the submission form.
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "INR"];

/// Currency assumed when the field is absent or blank.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Metadata of an uploaded file part.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub size: u64,
}

impl Attachment {
    pub fn new(file_name: Option<String>, size: u64) -> Self {
        Self { file_name, size }
    }

    /// A file input with no selection still posts an empty part. Such a
    /// placeholder does not count as an attachment.
    pub fn is_placeholder(&self) -> bool {
        self.size == 0 && self.file_name.as_deref().is_none_or(str::is_empty)
    }

    pub fn oversized(&self) -> bool {
        self.size > MAX_ATTACHMENT_BYTES
    }
}

/// One vendor submission as extracted from the form. String fields arrive
/// trimmed; a budget holds `None` when the raw value did not parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub resource_list: String,
    pub currency: String,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub cv: Option<Attachment>,
    pub rate_card: Option<Attachment>,
}

impl Submission {
    pub fn has_cv(&self) -> bool {
        self.cv.as_ref().is_some_and(|a| !a.is_placeholder())
    }

    pub fn has_rate_card(&self) -> bool {
        self.rate_card.as_ref().is_some_and(|a| !a.is_placeholder())
    }
}

/// Parse a budget field. Empty input and a literal NaN both count as a
/// failed parse.
pub fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Blank currency falls back to [`DEFAULT_CURRENCY`]; anything else is
/// accepted as typed.
pub fn normalize_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_budget_accepts_numbers() {
        assert_eq!(parse_budget("1000"), Some(1000.0));
        assert_eq!(parse_budget("250.50"), Some(250.5));
        assert_eq!(parse_budget(" 42 "), Some(42.0));
        assert_eq!(parse_budget("-5"), Some(-5.0));
        assert_eq!(parse_budget("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_budget_rejects_non_numbers() {
        assert_eq!(parse_budget(""), None);
        assert_eq!(parse_budget("   "), None);
        assert_eq!(parse_budget("abc"), None);
        assert_eq!(parse_budget("12abc"), None);
        assert_eq!(parse_budget("1,000"), None);
        assert_eq!(parse_budget("NaN"), None);
    }

    #[test]
    fn normalize_currency_defaults_when_blank() {
        assert_eq!(normalize_currency(""), "USD");
        assert_eq!(normalize_currency("  "), "USD");
        assert_eq!(normalize_currency("EUR"), "EUR");
        assert_eq!(normalize_currency(" GBP "), "GBP");
        // Any string is accepted; the option list is a form concern.
        assert_eq!(normalize_currency("BTC"), "BTC");
    }

    #[test]
    fn placeholder_parts_do_not_count_as_attachments() {
        let placeholder = Attachment::new(None, 0);
        assert!(placeholder.is_placeholder());

        let unnamed_placeholder = Attachment::new(Some(String::new()), 0);
        assert!(unnamed_placeholder.is_placeholder());

        let real = Attachment::new(Some("cv.pdf".to_string()), 12);
        assert!(!real.is_placeholder());

        let submission = Submission {
            cv: Some(placeholder),
            rate_card: Some(real),
            ..Submission::default()
        };
        assert!(!submission.has_cv());
        assert!(submission.has_rate_card());
    }

    #[test]
    fn oversized_is_strictly_above_the_limit() {
        let at_limit = Attachment::new(Some("cv.pdf".to_string()), MAX_ATTACHMENT_BYTES);
        assert!(!at_limit.oversized());

        let above = Attachment::new(Some("cv.pdf".to_string()), MAX_ATTACHMENT_BYTES + 1);
        assert!(above.oversized());
    }
}
