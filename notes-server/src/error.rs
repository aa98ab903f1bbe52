use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{dto::Envelope, repository::RepositoryError};

/// Input problems detected before storage is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title required")]
    TitleRequired,

    #[error("Id and title required")]
    IdAndTitleRequired,

    #[error("Id required")]
    IdRequired,

    #[error("Invalid id")]
    InvalidId,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),

    /// Unreadable request body. Reported like a storage failure.
    #[error("Malformed request body: {0}")]
    Body(String),
}

impl ServiceError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(e) => {
                tracing::debug!("rejected request: {e}");
                e.to_string()
            }
            Self::Storage(e) => {
                tracing::error!("storage failure: {e}");
                "DB error".to_string()
            }
            Self::Body(e) => {
                tracing::error!("failed to read request body: {e}");
                "DB error".to_string()
            }
        };

        (self.status(), Json(Envelope::failure(message))).into_response()
    }
}
