use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum PortalError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("bearer token failed verification")]
    InvalidToken,

    #[error("unknown username")]
    InvalidUser,

    #[error("password mismatch")]
    InvalidPassword,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Token encoding error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Blocking task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            PortalError::MissingToken | PortalError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_TOKEN".to_string(),
                    message: "Invalid JWT Token".to_string(),
                },
            ),
            PortalError::InvalidUser => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_USER".to_string(),
                    message: "Invalid user".to_string(),
                },
            ),
            PortalError::InvalidPassword => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_PASSWORD".to_string(),
                    message: "Invalid password".to_string(),
                },
            ),
            PortalError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{what} not found"),
                },
            ),
            PortalError::Database(_)
            | PortalError::Jwt(_)
            | PortalError::Hash(_)
            | PortalError::Join(_) => {
                // Detail goes to the log, not the wire.
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
