//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
///
/// Composition itself never fails; these surface while turning raw host
/// input into a [`PromptRequest`](crate::domain::PromptRequest).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl DomainError {
    pub fn invalid_input<F: AsRef<str>, R: AsRef<str>>(field: F, reason: R) -> Self {
        Self::InvalidInput {
            field: field.as_ref().to_string(),
            reason: reason.as_ref().to_string(),
        }
    }
}
