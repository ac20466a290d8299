use crate::types::NewestObject;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failure taxonomy for bucket inspection
#[derive(Debug)]
pub enum HealthError {
    InvalidFormat(String),
    EmptyBucket(String),
    StaleObject {
        age_seconds: f64,
        max_age_seconds: i64,
        newest: NewestObject,
    },
    ListPermissionDenied,
    BucketAccessError(String),
    Unexpected(String),
}

/// JSON failure envelope
#[derive(Serialize)]
struct FailResponse {
    status: &'static str,
    reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    newest_object: Option<NewestObject>,
}

impl HealthError {
    fn status_code(&self) -> StatusCode {
        match self {
            HealthError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            HealthError::EmptyBucket(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HealthError::StaleObject { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HealthError::ListPermissionDenied => StatusCode::INTERNAL_SERVER_ERROR,
            HealthError::BucketAccessError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HealthError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            HealthError::InvalidFormat(token) => format!(
                "Invalid duration format: {}. Use format like '24h', '60m', or '2d'",
                token
            ),
            HealthError::EmptyBucket(bucket) => format!("Bucket '{}' is empty", bucket),
            HealthError::StaleObject {
                age_seconds,
                max_age_seconds,
                ..
            } => format!(
                "Newest object is too old ({:.0} seconds, max age: {} seconds)",
                age_seconds, max_age_seconds
            ),
            HealthError::ListPermissionDenied => {
                "Cannot list bucket contents. The 's3:ListBucket' permission is required."
                    .to_string()
            }
            HealthError::BucketAccessError(msg) => format!("Error accessing bucket: {}", msg),
            HealthError::Unexpected(msg) => format!("Unexpected error: {}", msg),
        }
    }

    fn newest_object(&self) -> Option<NewestObject> {
        match self {
            HealthError::StaleObject { newest, .. } => Some(newest.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        let body = FailResponse {
            status: "fail",
            reason: self.reason(),
            newest_object: self.newest_object(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
