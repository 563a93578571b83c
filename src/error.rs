use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to render page: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %self, "Request failed");

        (status, self.to_string()).into_response()
    }
}
