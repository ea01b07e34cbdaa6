use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::{LoadError, RankerError};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Model {0} not found")]
    ModelNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Inactive user")]
    InactiveUser,

    #[error("Model {0} is not ready")]
    ModelNotReady(String),

    #[error("Data loading error: {0}")]
    DataLoad(#[from] LoadError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Single entry of an error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub error_key: String,
    pub error_message: String,
    #[schema(value_type = Option<Object>)]
    pub error_loc: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

impl AppError {
    pub fn error_key(&self) -> &'static str {
        match self {
            AppError::ModelNotFound(_) => "model_not_found",
            AppError::UserNotFound(_) => "user_not_found",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::InactiveUser => "inactive_user",
            AppError::ModelNotReady(_) => "model_not_ready",
            AppError::DataLoad(_) | AppError::Internal(_) => "server_error",
        }
    }

    /// Shorthand for the generic bearer-token rejection
    pub fn invalid_credentials() -> Self {
        AppError::Unauthorized("Could not validate credentials".to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Internal details stay in the logs
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(ErrorResponse {
            errors: vec![ErrorDetail {
                error_key: self.error_key().to_string(),
                error_message: message,
                error_loc: None,
            }],
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ModelNotFound(_) | AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InactiveUser => StatusCode::BAD_REQUEST,
            AppError::ModelNotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DataLoad(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!(error = %err, "Token rejected");
        AppError::invalid_credentials()
    }
}

/// Attach the model name to a ranker failure.
pub fn ranker_error(model_name: &str, err: RankerError) -> AppError {
    match err {
        RankerError::NotFitted => AppError::ModelNotReady(model_name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ModelNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::UserNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::invalid_credentials().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InactiveUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ranker_error("popular", RankerError::NotFitted).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let response = AppError::ModelNotFound("foo".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["errors"][0]["error_key"], "model_not_found");
        assert_eq!(json["errors"][0]["error_message"], "Model foo not found");
        assert!(json["errors"][0]["error_loc"].is_null());
    }

    #[actix_web::test]
    async fn test_unauthorized_sets_challenge_header() {
        let response = AppError::invalid_credentials().error_response();

        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[actix_web::test]
    async fn test_internal_message_is_hidden() {
        let response = AppError::Internal("db password leaked".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();

        assert!(!String::from_utf8_lossy(&body).contains("leaked"));
    }
}
