use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use crate::{error::AppError, state::AppState, views::LIST_PATH};

pub mod doc;
pub mod health;
pub mod products;

// Build the application router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(LIST_PATH) }))
        .route("/health", get(health::health_check))
        .merge(products::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
