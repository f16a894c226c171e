//! REST API error types
//!
//! Every handler error renders as `{"error": "<message>", "code": "<CODE>"}`
//! plus `"field"` for validation errors.

use vg_auth::AuthError;
use vg_core::CoreError;
use vg_db::DbError;
use vg_ledger::LedgerError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed validation (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Request is well-formed but not allowed in the current state (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Bad or expired credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// No credentials presented (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// The ledger is unavailable or rejected the transaction (500)
    #[error("External service error: {message} {location}")]
    ExternalService {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        ApiError::ExternalService {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ExternalService { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code();
        let (error, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::BadRequest { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::ExternalService { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        (status, Json(ApiErrorResponse { error, code, field })).into_response()
    }
}

/// Domain validation failures become 400s
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field().map(str::to_string);
        let message = match e {
            CoreError::Validation { message, .. } => message,
            CoreError::InvalidIdentityNumber { .. } => {
                "Invalid Identity Number format.".to_string()
            }
            CoreError::Underage { .. } => "You must be over 18 to vote.".to_string(),
            CoreError::InvalidWalletAddress { value, .. } => {
                format!("Invalid wallet address: {}", value)
            }
        };

        ApiError::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "Resource already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::NotFound { .. } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. }
            | DbError::InvalidRow { .. }
            | DbError::Migration { .. }
            | DbError::Initialization { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// A missing token is 403, anything wrong with a presented token is 401
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::MissingHeader { .. } => ApiError::Forbidden {
                message: "Token required.".to_string(),
                location,
            },
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                message: "Session expired.".to_string(),
                location,
            },
            AuthError::InvalidToken { .. }
            | AuthError::InvalidScheme { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => {
                log::debug!("Rejected token: {}", e);
                ApiError::Unauthorized {
                    message: "Invalid token.".to_string(),
                    location,
                }
            }
            AuthError::JwtEncode { .. }
            | AuthError::PasswordHash { .. }
            | AuthError::InvalidKey { .. } => {
                log::error!("Credential error: {}", e);
                ApiError::Internal {
                    message: "Internal Server Error.".to_string(),
                    location,
                }
            }
        }
    }
}

/// Ledger failures are reported without node internals
impl From<LedgerError> for ApiError {
    #[track_caller]
    fn from(e: LedgerError) -> Self {
        log::error!("Ledger error: {}", e);

        let message = match &e {
            LedgerError::Execution { digest, .. } => {
                format!("Ledger transaction {} failed", digest)
            }
            _ => "Ledger request failed".to_string(),
        };

        ApiError::ExternalService {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
