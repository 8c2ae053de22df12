use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Errors surfaced to HTTP callers. Every variant renders as
/// `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Unknown user and wrong password share this variant so callers
    /// cannot tell them apart.
    #[error("{}", INVALID_CREDENTIALS)]
    Unauthorized,

    #[error("Unsupported content type")]
    UnsupportedMediaType,

    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal { message, source } = &self {
            tracing::error!(error = ?source, %message, "request failed");
        }
        let body = FailureBody {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_hides_source() {
        let err = ApiError::internal("An error occurred during login", anyhow::anyhow!("db down"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "An error occurred during login");
    }

    #[test]
    fn unauthorized_uses_generic_message() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Unauthorized.to_string(), INVALID_CREDENTIALS);
    }

    #[test]
    fn failure_body_serialization() {
        let body = FailureBody {
            success: false,
            message: "Invalid email address".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid email address");
    }
}
