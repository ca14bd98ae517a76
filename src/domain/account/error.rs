//! Registration outcomes

use thiserror::Error;

use super::validation::AccountValidationError;

/// Errors returned by the registration and duplicate-check workflows.
///
/// Every variant is terminal for the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    ValidationFailed(#[from] AccountValidationError),

    #[error("No permission to create roles other than user")]
    ForbiddenRole(String),

    #[error("Username already exists")]
    DuplicateIdentifier(String),

    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    #[error("Account store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RegistrationError {
    /// Stable machine-readable name of the outcome
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "malformed_request",
            Self::ValidationFailed(_) => "validation_failed",
            Self::ForbiddenRole(_) => "forbidden_role",
            Self::DuplicateIdentifier(_) => "duplicate_identifier",
            Self::HashingFailed(_) => "hashing_failed",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}
