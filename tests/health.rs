mod common;

use axum::{extract::State, http::StatusCode};
use inventory_tracker::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let response = health_check(State(state)).await?;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    Ok(())
}

#[tokio::test]
async fn health_route_serves_json() -> anyhow::Result<()> {
    let app = common::build_app(common::setup_state().await?);
    let response = common::get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&common::body_text(response).await)?;
    assert_eq!(json["message"], "Health check");
    assert_eq!(json["data"]["status"], "ok");
    Ok(())
}
