use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Uniform envelope returned by every operation, success or failure.
/// Constructed once per request and never mutated after it is returned.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetails {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    pub timestamp: DateTime<Utc>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Build a response envelope. Pure construction; the timestamp is captured
/// at call time.
pub fn prepare_response(
    message: impl Into<String>,
    status: u16,
    path: impl Into<String>,
    data: Option<Value>,
) -> ResponseDetails {
    ResponseDetails {
        status,
        message: message.into(),
        errors: None,
        timestamp: Utc::now(),
        path: path.into(),
        data,
    }
}

impl IntoResponse for ResponseDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn carries_message_status_path_and_data() {
        let response = prepare_response(
            "Success",
            200,
            "/api/v1/mentor/login",
            Some(json!("Login successful")),
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.message, "Success");
        assert_eq!(response.path, "/api/v1/mentor/login");
        assert_eq!(response.data, Some(json!("Login successful")));
        assert!(response.errors.is_none());
    }

    #[test]
    fn omits_empty_errors_and_data_from_wire_format() {
        let response = prepare_response("Deleted Successfully", 200, "/delete/123", None);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("errors").is_none());
        assert!(value.get("data").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn http_status_follows_envelope_status() {
        let response = prepare_response("Created", 201, "/register", None).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
