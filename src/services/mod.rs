//! Application services orchestrating submission handling.
pub mod submissions;
pub mod validation;

use crate::services::validation::FieldErrors;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid form submission")]
    Validation(FieldErrors),
    #[error("submission invariant violated: {0}")]
    Invariant(&'static str),
}
