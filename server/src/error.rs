use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use menu::navigation::NavigationError;
use menu::validation::ErrorMap;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Invalid(ErrorMap),
}

impl From<NavigationError> for AppError {
    fn from(error: NavigationError) -> Self {
        match error {
            NavigationError::EmptySequence => AppError::NotFound("dishes".to_string()),
            NavigationError::IdentifierNotFound(id) => AppError::NotFound(format!("dish {id}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        // Validation failures carry the per-field error map as JSON.
        match self {
            AppError::Invalid(errors) => (status, Json(errors)).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}
