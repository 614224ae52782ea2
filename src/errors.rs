use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    ConstraintViolation,
    ConnectionLost,
    Query,
}

impl std::fmt::Display for PersistenceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PersistenceErrorKind::ConstraintViolation => "constraint violation",
            PersistenceErrorKind::ConnectionLost => "connection lost",
            PersistenceErrorKind::Query => "query failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error ({kind}): {message}")]
    Persistence {
        kind: PersistenceErrorKind,
        message: String,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn persistence(kind: PersistenceErrorKind, message: impl Into<String>) -> Self {
        AppError::Persistence {
            kind,
            message: message.into(),
        }
    }

    /// Message exposed to clients. Causes stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "Resource Not Found".to_string(),
            AppError::BadRequest(_) => "Bad Request".to_string(),
            AppError::MethodNotAllowed(_) => "Method Not Allowed".to_string(),
            AppError::ValidationError(_) | AppError::Persistence { .. } => {
                "Unprocessable Entity".to_string()
            }
            AppError::Auth(err) => err.to_string(),
            AppError::InternalError(_) => "Internal Server Error".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Persistence { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(err) => err.status_code(),
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Persistence { kind, message } => {
                log::error!("Persistence failure ({}): {}", kind, message)
            }
            AppError::InternalError(message) => log::error!("Internal error: {}", message),
            AppError::Auth(err) => log::warn!("Rejected request: {} ({})", err, err.code()),
            other => log::debug!("Request failed: {}", other),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.status_code().as_u16(),
            message: self.public_message(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        let kind = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                PersistenceErrorKind::ConstraintViolation
            }
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => PersistenceErrorKind::ConnectionLost,
            _ => PersistenceErrorKind::Query,
        };
        AppError::persistence(kind, err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("question".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed("PUT /questions".into()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::persistence(PersistenceErrorKind::ConnectionLost, "down").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(AuthError::UnauthorizedPermission).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("question 7".into());
        assert_eq!(err.to_string(), "Not found: question 7");
    }

    #[actix_web::test]
    async fn test_persistence_error_body_hides_cause() {
        let err = AppError::persistence(
            PersistenceErrorKind::ConstraintViolation,
            "E11000 duplicate key error collection: drinks index: title_unique",
        );
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 422);
        assert_eq!(json["message"], "Unprocessable Entity");
    }

    #[actix_web::test]
    async fn test_auth_error_body_carries_description() {
        let err = AppError::from(AuthError::MissingPermissions);
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], 400);
        assert_eq!(json["message"], "Permissions not included in JWT.");
    }
}
