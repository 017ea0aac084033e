use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snip_core::ShortenerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced to HTTP clients as plain-text responses.
///
/// The display string of each variant is the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),
    #[error("URL is required")]
    UrlRequired,
    #[error("Short code is required")]
    ShortCodeRequired,
    #[error("URL not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Error reading request body")]
    BodyRead(String),
    #[error("Failed to store URL")]
    Store(#[source] ShortenerError),
    #[error("Failed to retrieve URL")]
    Retrieve(#[source] ShortenerError),
    #[error("Stored URL is not a valid redirect target")]
    InvalidLocation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::UrlRequired | AppError::ShortCodeRequired => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BodyRead(_)
            | AppError::Store(_)
            | AppError::Retrieve(_)
            | AppError::InvalidLocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
