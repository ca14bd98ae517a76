//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::RegistrationError;

/// Broad error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    ConflictError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(
        status: StatusCode,
        error_type: ApiErrorType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: None,
                },
            },
        }
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        let code = err.code();

        // Internal details are logged where they occur, never echoed
        let api_error = match &err {
            RegistrationError::MalformedRequest(message) => Self::bad_request(message.clone()),
            RegistrationError::ValidationFailed(_) | RegistrationError::ForbiddenRole(_) => {
                Self::bad_request(err.to_string())
            }
            RegistrationError::DuplicateIdentifier(_) => Self::conflict(err.to_string()),
            RegistrationError::HashingFailed(_) => {
                Self::internal("Internal server error while processing the password")
            }
            RegistrationError::StoreUnavailable(_) => {
                Self::internal("Internal server error while accessing the account store")
            }
        };

        api_error.with_code(code)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountValidationError;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid username");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Invalid username");
    }

    #[test]
    fn test_registration_error_status_mapping() {
        let cases = [
            (RegistrationError::MalformedRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                RegistrationError::ValidationFailed(AccountValidationError::InvalidUsernameFormat),
                StatusCode::BAD_REQUEST,
            ),
            (RegistrationError::ForbiddenRole("admin".into()), StatusCode::BAD_REQUEST),
            (RegistrationError::DuplicateIdentifier("alice1".into()), StatusCode::CONFLICT),
            (RegistrationError::HashingFailed("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (RegistrationError::StoreUnavailable("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let code = err.code();
            let api_err = ApiError::from(err);
            assert_eq!(api_err.status, status);
            assert_eq!(api_err.response.error.code.as_deref(), Some(code));
        }
    }

    #[test]
    fn test_internal_details_not_echoed() {
        let err = RegistrationError::StoreUnavailable(
            "error communicating with database: Connection refused (os error 111)".into(),
        );
        let api_err = ApiError::from(err);

        assert!(!api_err.response.error.message.contains("Connection refused"));
        assert!(!api_err.response.error.message.contains("os error"));
    }

    #[test]
    fn test_validation_message_names_rule() {
        let api_err = ApiError::from(RegistrationError::ValidationFailed(
            AccountValidationError::UsernameMustStartWithLetter,
        ));

        assert_eq!(api_err.response.error.message, "Username must start with a letter");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::conflict("Username already exists").with_code("duplicate_identifier");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"conflict_error\""));
        assert!(json.contains("\"code\":\"duplicate_identifier\""));
        assert!(json.contains("Username already exists"));
    }
}
