// HTTP translation of domain failures
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::api::format::{prepare_response, ResponseDetails};
use crate::services::MentorError;

/// A domain failure paired with the request path, so the error envelope
/// carries the same fields as a success envelope.
#[derive(Debug)]
pub struct ApiError {
    error: MentorError,
    path: String,
}

impl ApiError {
    pub fn new(error: MentorError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self.error {
            MentorError::EmployeeIdAlreadyRegistered(_)
            | MentorError::EmailAlreadyRegistered(_) => 409,
            MentorError::WrongCredentials => 401,
            MentorError::ResourceNotFound(_) | MentorError::InvalidMentor(_) => 404,
            MentorError::PasswordHash(_)
            | MentorError::Serialization(_)
            | MentorError::Store(_) => 500,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self.error {
            MentorError::EmployeeIdAlreadyRegistered(_) => "EMPLOYEE_ID_ALREADY_REGISTERED",
            MentorError::EmailAlreadyRegistered(_) => "EMAIL_ALREADY_REGISTERED",
            MentorError::WrongCredentials => "WRONG_CREDENTIALS",
            MentorError::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            MentorError::InvalidMentor(_) => "INVALID_MENTOR",
            MentorError::PasswordHash(_)
            | MentorError::Serialization(_)
            | MentorError::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match &self.error {
            // Don't expose operational details to clients
            MentorError::PasswordHash(_)
            | MentorError::Serialization(_)
            | MentorError::Store(_) => {
                "An error occurred while processing your request".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn into_envelope(self) -> ResponseDetails {
        if self.status_code() == 500 {
            tracing::error!(path = %self.path, "request failed: {}", self.error);
        }
        ResponseDetails {
            errors: Some(json!({ "code": self.error_code() })),
            ..prepare_response(self.message(), self.status_code(), self.path, None)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::manager::DatabaseError;

    #[test]
    fn duplicate_registrations_conflict() {
        let err = ApiError::new(MentorError::EmployeeIdAlreadyRegistered(123), "/register");
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "EMPLOYEE_ID_ALREADY_REGISTERED");
    }

    #[test]
    fn credentials_failures_are_unauthorized() {
        let err = ApiError::new(MentorError::WrongCredentials, "/login");
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn store_failures_are_masked() {
        let err = ApiError::new(
            MentorError::Store(DatabaseError::QueryError("connection reset".into())),
            "/get-all-mentors",
        );
        assert_eq!(err.status_code(), 500);
        let envelope = err.into_envelope();
        assert_eq!(envelope.message, "An error occurred while processing your request");
        assert_eq!(envelope.errors, Some(json!({ "code": "INTERNAL_SERVER_ERROR" })));
    }

    #[test]
    fn envelope_mirrors_request_path() {
        let envelope =
            ApiError::new(MentorError::InvalidMentor(9), "/api/v1/mentor/9").into_envelope();
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.path, "/api/v1/mentor/9");
    }
}
