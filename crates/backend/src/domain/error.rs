use thiserror::Error;

/// Domain-level failures, mapped to HTTP status codes at the handler edge
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Appointment not found: {0}")]
    NotFound(String),
}
