use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::activity::ErrorResponse;

/// Failures of the signup and unregister operations.
///
/// The `Display` text of each variant is the `detail` message returned to
/// clients, so it is part of the API contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl ActivityError {
    /// Short machine-readable code, used as the GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            ActivityError::NotFound => "NOT_FOUND",
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => "BAD_REQUEST",
        }
    }
}

impl ResponseError for ActivityError {
    fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Errors raised while reading the process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}
