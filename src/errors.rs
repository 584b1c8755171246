use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        /// Required answer count, set when the failure is an answer-count mismatch.
        expected_answers: Option<usize>,
    },

    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            message: message.into(),
            expected_answers: None,
        }
    }

    pub fn wrong_answer_count(expected: usize, received: usize) -> Self {
        AppError::InvalidArgument {
            message: format!("must answer all {expected} questions, received {received}"),
            expected_answers: Some(expected),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        AppError::InvalidState {
            message: message.into(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::InvalidState { .. } => "INVALID_STATE",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidState { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            status: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::invalid_argument(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
