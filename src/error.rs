use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Storage unavailable")]
    StorageUnavailable(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested product does not exist.",
            ),
            AppError::StorageUnavailable(err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side. Please try again later.",
                )
            }
        };

        let body = views::error_page(status, &self.to_string(), detail);
        (status, Html(body.into_string())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
