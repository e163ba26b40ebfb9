#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use inventory_tracker::{
    config::DatabaseConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::ProductInput,
    routes::create_router,
    state::AppState,
};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Fresh in-memory database per test. A single connection keeps every query
/// on the same SQLite memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub fn build_app(state: AppState) -> Router {
    create_router().with_state(state)
}

pub fn input(name: &str, description: &str, price: &str, quantity: i32) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from_str(price).expect("valid decimal literal"),
        quantity,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
