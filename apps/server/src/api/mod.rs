//! HTTP API surface.
//!
//! All routes live under `/api`. Everything except registration, login and
//! the status probe requires a bearer token.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::main_lib::AppState;

mod appointments;
mod dogs;
mod emergency;
mod health_records;
mod nutrition;
mod training;
mod vaccinations;

/// Liveness probe, intentionally unauthenticated.
async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/public/status", get(status))
        .merge(auth::router())
        .merge(dogs::router())
        .merge(vaccinations::router())
        .merge(health_records::router())
        .merge(appointments::router())
        .merge(training::router())
        .merge(emergency::router())
        .merge(nutrition::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
